use actor_framework::{ActorEntity, FrameworkError, ResourceActor, ResourceClient};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct SimpleUser {
    id: u32,
    name: String,
    team: String,
}

#[derive(Debug)]
struct SimpleUserCreate {
    id: u32,
    name: String,
    team: String,
}

#[derive(Debug)]
struct SimpleUserUpdate {
    name: String,
    team: String,
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("{0} must not be blank")]
struct SimpleUserError(&'static str);

impl SimpleUser {
    fn set_name(&mut self, name: String) -> Result<(), SimpleUserError> {
        if name.is_empty() {
            return Err(SimpleUserError("name"));
        }
        self.name = name;
        Ok(())
    }

    fn set_team(&mut self, team: String) -> Result<(), SimpleUserError> {
        if team.is_empty() {
            return Err(SimpleUserError("team"));
        }
        self.team = team;
        Ok(())
    }
}

impl ActorEntity for SimpleUser {
    type Id = u32;
    type Create = SimpleUserCreate;
    type Update = SimpleUserUpdate;
    type Query = String;
    type Error = SimpleUserError;

    fn id(&self) -> u32 {
        self.id
    }

    fn from_create_params(params: SimpleUserCreate) -> Result<Self, Self::Error> {
        let mut user = Self {
            id: params.id,
            name: String::new(),
            team: String::new(),
        };
        user.set_name(params.name)?;
        user.set_team(params.team)?;
        Ok(user)
    }

    fn apply_update(&mut self, update: SimpleUserUpdate) -> Result<(), Self::Error> {
        self.set_name(update.name)?;
        self.set_team(update.team)
    }

    fn matches(&self, query: &String) -> bool {
        self.team.eq_ignore_ascii_case(query)
    }
}

fn user(id: u32, name: &str, team: &str) -> SimpleUser {
    SimpleUser {
        id,
        name: name.into(),
        team: team.into(),
    }
}

fn create(id: u32, name: &str, team: &str) -> SimpleUserCreate {
    SimpleUserCreate {
        id,
        name: name.into(),
        team: team.into(),
    }
}

fn spawn_with(entities: Vec<SimpleUser>) -> ResourceClient<SimpleUser> {
    let (actor, client) = ResourceActor::with_entities(10, entities);
    tokio::spawn(actor.run());
    client
}

fn entity_error(err: FrameworkError) -> SimpleUserError {
    match err {
        FrameworkError::EntityError(e) => *e
            .downcast::<SimpleUserError>()
            .expect("entity error should be a SimpleUserError"),
        other => panic!("expected EntityError, got {other:?}"),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let client = spawn_with(Vec::new());

    // 1. Create
    let alice = client.create(create(7, "Alice", "Red")).await.unwrap();
    assert_eq!(alice, user(7, "Alice", "Red"));

    // 2. Get
    let fetched = client.get(7).await.unwrap();
    assert_eq!(fetched, Some(user(7, "Alice", "Red")));

    // 3. Update
    let update = SimpleUserUpdate {
        name: "Bob".into(),
        team: "Blue".into(),
    };
    let updated = client.update(7, update).await.unwrap();
    assert_eq!(updated, user(7, "Bob", "Blue"));

    // 4. Delete
    client.delete(7).await.unwrap();
    assert!(client.get(7).await.unwrap().is_none());
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_keeps_insertion_order() {
    let client = spawn_with(vec![user(3, "Cy", "Red")]);

    client.create(create(1, "Al", "Blue")).await.unwrap();
    client.create(create(2, "Bo", "Red")).await.unwrap();

    let ids: Vec<u32> = client.list().await.unwrap().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[tokio::test]
async fn test_create_duplicate_id_conflicts() {
    let client = spawn_with(vec![user(1, "Al", "Red")]);

    let err = client.create(create(1, "Other", "Blue")).await.unwrap_err();
    assert!(matches!(err, FrameworkError::Conflict(ref id) if id == "1"));

    let all = client.list().await.unwrap();
    assert_eq!(all, vec![user(1, "Al", "Red")]);
}

#[tokio::test]
async fn test_create_validation_runs_before_conflict_check() {
    let client = spawn_with(vec![user(1, "Al", "Red")]);

    let err = client.create(create(1, "", "Blue")).await.unwrap_err();
    assert_eq!(entity_error(err), SimpleUserError("name"));
    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_filters_in_order() {
    let client = spawn_with(vec![
        user(1, "Al", "Red"),
        user(2, "Bo", "Blue"),
        user(3, "Cy", "red"),
    ]);

    let hits = client.search("RED".into()).await.unwrap();
    let ids: Vec<u32> = hits.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 3]);

    let none = client.search("Green".into()).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_failed_update_keeps_fields_applied_before_the_error() {
    let client = spawn_with(vec![user(1, "Al", "Red")]);

    let update = SimpleUserUpdate {
        name: "Zed".into(),
        team: String::new(),
    };
    let err = client.update(1, update).await.unwrap_err();
    assert_eq!(entity_error(err), SimpleUserError("team"));

    // The name setter ran before the team setter failed.
    let stored = client.get(1).await.unwrap().unwrap();
    assert_eq!(stored, user(1, "Zed", "Red"));
}

#[tokio::test]
async fn test_update_keeps_position() {
    let client = spawn_with(vec![user(1, "Al", "Red"), user(2, "Bo", "Blue")]);

    let update = SimpleUserUpdate {
        name: "Alan".into(),
        team: "Green".into(),
    };
    client.update(1, update).await.unwrap();

    let all = client.list().await.unwrap();
    assert_eq!(all, vec![user(1, "Alan", "Green"), user(2, "Bo", "Blue")]);
}

#[tokio::test]
async fn test_update_and_delete_unknown_id_not_found() {
    let client = spawn_with(vec![user(1, "Al", "Red")]);

    let update = SimpleUserUpdate {
        name: "X".into(),
        team: "Y".into(),
    };
    let err = client.update(99, update).await.unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(ref id) if id == "99"));

    let err = client.delete(99).await.unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_removes_last_matching_record() {
    // Duplicate ids can only come from a fixture handed to `with_entities`.
    let client = spawn_with(vec![
        user(1, "First", "Red"),
        user(2, "Bo", "Blue"),
        user(1, "Second", "Red"),
    ]);

    client.delete(1).await.unwrap();

    let all = client.list().await.unwrap();
    assert_eq!(all, vec![user(1, "First", "Red"), user(2, "Bo", "Blue")]);

    // Get and update target the first match.
    assert_eq!(client.get(1).await.unwrap().unwrap().name, "First");
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = ResourceActor::<SimpleUser>::new(1);
    drop(actor);

    let err = client.list().await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
}

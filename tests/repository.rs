use chrono::{DateTime, NaiveDateTime};
use users_service::domain::types::UserId;
use users_service::domain::user::{NewUser, UpdateUser, UserFilter};
use users_service::repository::errors::RepositoryError;
use users_service::repository::{DieselRepository, UserListQuery, UserReader, UserWriter};

mod common;

fn at(seconds: i64) -> NaiveDateTime {
    DateTime::from_timestamp(1_700_000_000 + seconds, 0)
        .unwrap()
        .naive_utc()
}

fn new_user(first_name: &str, last_name: &str, created_at: NaiveDateTime) -> NewUser {
    NewUser {
        id: UserId::generate(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        phone: "555-0100".to_string(),
        created_at,
    }
}

fn seed(repo: &DieselRepository, users: &[(&str, &str)]) -> Vec<NewUser> {
    users
        .iter()
        .enumerate()
        .map(|(i, (first, last))| {
            let user = new_user(first, last, at(i as i64));
            repo.create_user(&user).unwrap();
            user
        })
        .collect()
}

#[test]
fn test_user_repository_crud() {
    let test_db = common::TestDb::new("test_user_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let ada = new_user("Ada", "Lovelace", at(0));
    let created = repo.create_user(&ada).unwrap();
    assert_eq!(created.id, ada.id);
    assert_eq!(created.created_at, ada.created_at);

    let fetched = repo.get_user_by_id(&ada.id).unwrap();
    assert_eq!(fetched.first_name, "Ada");
    assert_eq!(fetched.last_name, "Lovelace");
    assert_eq!(fetched.email, "ada@example.com");
    assert_eq!(fetched.phone, "555-0100");

    repo.update_user(
        &ada.id,
        &UpdateUser {
            last_name: Some("King".to_string()),
            ..UpdateUser::default()
        },
    )
    .unwrap();

    let updated = repo.get_user_by_id(&ada.id).unwrap();
    assert_eq!(updated.first_name, "Ada");
    assert_eq!(updated.last_name, "King");
    assert_eq!(updated.email, "ada@example.com");
    assert!(updated.updated_at >= updated.created_at);

    repo.delete_user(&ada.id).unwrap();
    assert!(matches!(
        repo.get_user_by_id(&ada.id),
        Err(RepositoryError::NotFound(id)) if id == ada.id
    ));
    assert_eq!(repo.count_users(&UserFilter::default()).unwrap(), 0);
}

#[test]
fn test_missing_rows_are_not_found() {
    let test_db = common::TestDb::new("test_missing_rows_are_not_found.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let ghost = UserId::new("ghost").unwrap();

    assert!(matches!(
        repo.get_user_by_id(&ghost),
        Err(RepositoryError::NotFound(_))
    ));
    assert!(matches!(
        repo.update_user(
            &ghost,
            &UpdateUser {
                phone: Some("1".to_string()),
                ..UpdateUser::default()
            }
        ),
        Err(RepositoryError::NotFound(_))
    ));
    assert!(matches!(
        repo.delete_user(&ghost),
        Err(RepositoryError::NotFound(_))
    ));
}

#[test]
fn test_update_without_fields_still_requires_existing_row() {
    let test_db = common::TestDb::new("test_update_without_fields.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let [ada] = <[NewUser; 1]>::try_from(seed(&repo, &[("Ada", "Lovelace")])).unwrap();

    repo.update_user(&ada.id, &UpdateUser::default()).unwrap();
    let unchanged = repo.get_user_by_id(&ada.id).unwrap();
    assert_eq!(unchanged.first_name, "Ada");
    assert_eq!(unchanged.last_name, "Lovelace");

    assert!(matches!(
        repo.update_user(&UserId::new("ghost").unwrap(), &UpdateUser::default()),
        Err(RepositoryError::NotFound(_))
    ));
}

#[test]
fn test_duplicate_id_is_a_constraint_violation() {
    let test_db = common::TestDb::new("test_duplicate_id.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let ada = new_user("Ada", "Lovelace", at(0));

    repo.create_user(&ada).unwrap();
    assert!(matches!(
        repo.create_user(&ada),
        Err(RepositoryError::ConstraintViolation(_))
    ));
}

#[test]
fn test_list_orders_by_creation_descending() {
    let test_db = common::TestDb::new("test_list_orders_by_creation.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    seed(
        &repo,
        &[("Ada", "Lovelace"), ("Grace", "Hopper"), ("Alan", "Turing")],
    );

    let users = repo.list_users(UserListQuery::default()).unwrap();
    let names: Vec<&str> = users.iter().map(|u| u.first_name.as_str()).collect();
    assert_eq!(names, ["Alan", "Grace", "Ada"]);
}

#[test]
fn test_filters_match_case_insensitive_substrings() {
    let test_db = common::TestDb::new("test_filters_match_substrings.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    seed(
        &repo,
        &[
            ("Ada", "Lovelace"),
            ("adam", "Smith"),
            ("Grace", "Hopper"),
            ("Madalyn", "Hopper"),
        ],
    );

    let filter = UserFilter::new(Some("AD".to_string()), None);
    let users = repo.list_users(UserListQuery::new(filter.clone())).unwrap();
    let mut names: Vec<&str> = users.iter().map(|u| u.first_name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, ["Ada", "Madalyn", "adam"]);
    assert!(
        users
            .iter()
            .all(|u| u.first_name.to_lowercase().contains("ad"))
    );
    assert_eq!(repo.count_users(&filter).unwrap(), 3);

    let both = UserFilter::new(Some("ad".to_string()), Some("hop".to_string()));
    let users = repo.list_users(UserListQuery::new(both.clone())).unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].first_name, "Madalyn");
    assert_eq!(repo.count_users(&both).unwrap(), 1);
}

#[test]
fn test_filter_wildcards_are_literal() {
    let test_db = common::TestDb::new("test_filter_wildcards.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    seed(&repo, &[("Ada", "Lovelace"), ("100%", "Percent")]);

    let filter = UserFilter::new(Some("%".to_string()), None);
    let users = repo.list_users(UserListQuery::new(filter.clone())).unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].first_name, "100%");
    assert_eq!(repo.count_users(&filter).unwrap(), 1);
}

#[test]
fn test_pagination_window_and_unbounded_count() {
    let test_db = common::TestDb::new("test_pagination_window.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let names: Vec<String> = (0..25).map(|n| format!("User{n:02}")).collect();
    let pairs: Vec<(&str, &str)> = names.iter().map(|n| (n.as_str(), "Doe")).collect();
    seed(&repo, &pairs);

    let page = repo
        .list_users(UserListQuery::default().paginate(20, 10))
        .unwrap();
    assert_eq!(page.len(), 5);
    // Newest first: offset 20 skips User24..User05.
    assert_eq!(page[0].first_name, "User04");
    assert_eq!(page[4].first_name, "User00");

    assert_eq!(repo.count_users(&UserFilter::default()).unwrap(), 25);

    let beyond = repo
        .list_users(UserListQuery::default().paginate(30, 10))
        .unwrap();
    assert!(beyond.is_empty());
}

#[test]
fn test_out_of_range_window_is_empty_or_unbounded() {
    let test_db = common::TestDb::new("test_out_of_range_window.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    seed(&repo, &[("Ada", "Lovelace"), ("Grace", "Hopper")]);

    let everything = repo
        .list_users(UserListQuery::default().paginate(0, usize::MAX))
        .unwrap();
    assert_eq!(everything.len(), 2);

    let beyond = repo
        .list_users(UserListQuery::default().paginate(usize::MAX, 10))
        .unwrap();
    assert!(beyond.is_empty());
}

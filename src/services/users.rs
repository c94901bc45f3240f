use crate::domain::types::UserId;
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::domain::user_profile::UserProfile;
use crate::dto::{ListPageData, ListQuery};
use crate::forms::FormInput;
use crate::forms::user::UserForm;
use crate::forms::user_profile::UserProfileForm;
use crate::listing::Listing;
use crate::repository::{UserProfileReader, UserProfileWriter, UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult, list_page};

/// Loads one page of users matching the search term in `query`.
pub fn list_users<R>(
    repo: &R,
    listing: &Listing<User>,
    query: &ListQuery,
) -> ServiceResult<ListPageData<User>>
where
    R: UserReader + ?Sized,
{
    let users = repo.list_users().map_err(|err| {
        log::error!("Failed to list users: {err}");
        err
    })?;

    Ok(list_page(listing, &users, query))
}

/// Fetches a user, failing with [`ServiceError::NotFound`] when it is missing.
pub fn get_user<R>(repo: &R, user_id: UserId) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    repo.get_user_by_id(user_id)
        .map_err(|err| {
            log::error!("Failed to load user {user_id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)
}

/// Validates the submitted form and stores a new user.
pub fn create_user<R>(repo: &R, input: &FormInput) -> ServiceResult<User>
where
    R: UserWriter + ?Sized,
{
    let form = UserForm::parse(input).map_err(|err| {
        log::error!("Failed to validate user form: {err}");
        err
    })?;

    let user = repo.create_user(&NewUser::from(form)).map_err(|err| {
        log::error!("Failed to create user: {err}");
        err
    })?;

    Ok(user)
}

/// Validates the submitted form and replaces the user's fields.
pub fn update_user<R>(repo: &R, user_id: UserId, input: &FormInput) -> ServiceResult<User>
where
    R: UserWriter + ?Sized,
{
    let form = UserForm::parse(input).map_err(|err| {
        log::error!("Failed to validate user form: {err}");
        err
    })?;

    let user = repo
        .update_user(user_id, &UpdateUser::from(form))
        .map_err(|err| {
            log::error!("Failed to update user {user_id}: {err}");
            err
        })?;

    Ok(user)
}

/// Removes the user together with its profile.
pub fn delete_user<R>(repo: &R, user_id: UserId) -> ServiceResult<()>
where
    R: UserWriter + ?Sized,
{
    repo.delete_user(user_id).map_err(|err| {
        log::error!("Failed to delete user {user_id}: {err}");
        err
    })?;

    Ok(())
}

/// Returns the user's profile, or `None` when none was saved yet.
pub fn get_user_profile<R>(repo: &R, user_id: UserId) -> ServiceResult<Option<UserProfile>>
where
    R: UserReader + UserProfileReader + ?Sized,
{
    get_user(repo, user_id)?;

    let profile = repo.get_user_profile(user_id).map_err(|err| {
        log::error!("Failed to load profile of user {user_id}: {err}");
        err
    })?;

    Ok(profile)
}

/// Validates the submitted form and creates or replaces the user's profile.
pub fn save_user_profile<R>(
    repo: &R,
    user_id: UserId,
    input: &FormInput,
) -> ServiceResult<UserProfile>
where
    R: UserReader + UserProfileWriter + ?Sized,
{
    get_user(repo, user_id)?;

    let form = UserProfileForm::parse(input).map_err(|err| {
        log::error!("Failed to validate profile form: {err}");
        err
    })?;

    let profile = repo
        .save_user_profile(&form.into_profile(user_id))
        .map_err(|err| {
            log::error!("Failed to save profile of user {user_id}: {err}");
            err
        })?;

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::domain::types::{UserEmail, UserName};
    use crate::repository::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn user(id: i32, name: &str) -> User {
        User {
            id: UserId::new(id).unwrap(),
            name: UserName::new(name).unwrap(),
            email: UserEmail::new(format!("user{id}@example.com")).unwrap(),
            image: None,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    fn roster() -> Vec<User> {
        ["Tom", "Tim", "Tommy", "Anna", "Tamara"]
            .iter()
            .enumerate()
            .map(|(i, name)| user(i as i32 + 1, name))
            .collect()
    }

    fn input(pairs: &[(&str, &str)]) -> FormInput {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn uid(id: i32) -> UserId {
        UserId::new(id).unwrap()
    }

    #[test]
    fn list_users_filters_by_name() {
        let mut repo = MockRepository::new();
        repo.expect_list_users().returning(|| Ok(roster()));
        let listing = Listing::new(10, &["name"]).unwrap();

        let data = list_users(&repo, &listing, &ListQuery::new(Some("tom"), None)).unwrap();

        let names: Vec<_> = data.page.items.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Tom", "Tommy"]);
        assert_eq!(data.search_query.as_deref(), Some("tom"));
        assert!(!data.page.has_previous && !data.page.has_next);
    }

    #[test]
    fn list_users_clamps_the_page() {
        let mut repo = MockRepository::new();
        repo.expect_list_users().returning(|| Ok(roster()));
        let listing = Listing::new(2, &["name"]).unwrap();

        let data = list_users(&repo, &listing, &ListQuery::new(None, Some("8"))).unwrap();

        assert_eq!(data.page.current_page, 3);
        assert_eq!(data.page.total_pages, 3);
        assert_eq!(data.page.items, vec![user(5, "Tamara")]);
        assert!(data.page.has_previous && !data.page.has_next);
    }

    #[test]
    fn list_users_propagates_store_failures() {
        let mut repo = MockRepository::new();
        repo.expect_list_users()
            .returning(|| Err(RepositoryError::Connection("down".into())));
        let listing = Listing::all_fields(10).unwrap();

        let result = list_users(&repo, &listing, &ListQuery::default());

        assert!(matches!(result, Err(ServiceError::Internal(_))));
    }

    #[test]
    fn missing_user_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_id().returning(|_| Ok(None));

        assert!(matches!(get_user(&repo, uid(9)), Err(ServiceError::NotFound)));
    }

    #[test]
    fn create_user_rejects_invalid_form_without_touching_the_store() {
        let mut repo = MockRepository::new();
        repo.expect_create_user().never();

        let result = create_user(&repo, &input(&[("name", "Tom"), ("email", "nope")]));

        match result {
            Err(ServiceError::Form(errors)) => {
                assert!(!errors.for_field("email").is_empty());
            }
            other => panic!("expected form error, got {other:?}"),
        }
    }

    #[test]
    fn create_user_stores_normalized_values() {
        let mut repo = MockRepository::new();
        repo.expect_create_user()
            .withf(|new_user| {
                new_user.name.as_str() == "Tom" && new_user.email.as_str() == "tom@example.com"
            })
            .times(1)
            .returning(|_| Ok(user(1, "Tom")));

        let created = create_user(
            &repo,
            &input(&[("name", "  Tom "), ("email", "Tom@Example.com")]),
        )
        .unwrap();

        assert_eq!(created.id, uid(1));
    }

    #[test]
    fn update_missing_user_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_update_user()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let result = update_user(
            &repo,
            uid(4),
            &input(&[("name", "Tom"), ("email", "tom@example.com")]),
        );

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn delete_user_forwards_to_the_store() {
        let mut repo = MockRepository::new();
        repo.expect_delete_user()
            .withf(|id| id.get() == 3)
            .times(1)
            .returning(|_| Ok(()));

        delete_user(&repo, uid(3)).unwrap();
    }

    #[test]
    fn profile_of_missing_user_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_id().returning(|_| Ok(None));
        repo.expect_get_user_profile().never();

        assert!(matches!(
            get_user_profile(&repo, uid(2)),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn save_user_profile_upserts_parsed_form() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_id()
            .returning(|id| Ok(Some(user(id.get(), "Tom"))));
        repo.expect_save_user_profile()
            .withf(|profile| {
                profile.user_id.get() == 1 && profile.phone_number.as_str() == "+12025550143"
            })
            .times(1)
            .returning(|profile| Ok(profile.clone()));

        let saved = save_user_profile(
            &repo,
            uid(1),
            &input(&[
                ("phone_number", "+1 202 555 0143"),
                ("address", "1 Main St"),
                ("date_of_birth", "1990-05-17"),
            ]),
        )
        .unwrap();

        assert_eq!(saved.address.as_str(), "1 Main St");
        assert_eq!(
            saved.date_of_birth,
            NaiveDate::from_ymd_opt(1990, 5, 17).unwrap()
        );
    }
}

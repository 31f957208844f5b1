/// Postgres repository tests
///
/// Each test runs against its own migrated database created from
/// TEST_DATABASE_URL. Run with `cargo test -- --ignored`.
mod utils;

use dsmovie_lib::modules::movie::{MovieForm, MovieRepository, MovieRepositoryImpl};
use dsmovie_lib::modules::score::{Score, ScoreDto, ScoreRepository, ScoreRepositoryImpl};
use dsmovie_lib::modules::user::{UserRepository, UserRepositoryImpl};
use dsmovie_lib::shared::application::pagination::PaginationParams;
use dsmovie_lib::shared::errors::AppError;
use dsmovie_lib::AppServices;
use futures::future::join_all;
use utils::factories::{MovieFactory, UserFactory};
use utils::helpers::as_user;
use utils::test_db::TestDb;
use uuid::Uuid;

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn movie_save_is_an_upsert() {
    let test_db = TestDb::new();
    let repo = MovieRepositoryImpl::new(test_db.database());

    let mut movie = MovieFactory::new().with_title("Original Title").build();
    let inserted = repo.save(&movie).await.unwrap();
    assert_eq!(inserted.title, "Original Title");

    movie.update_details("Changed Title", None);
    repo.save(&movie).await.unwrap();

    let found = repo.find_by_id(movie.id).await.unwrap().unwrap();
    assert_eq!(found.title, "Changed Title");
    assert!(repo.exists(movie.id).await.unwrap());
    assert!(!repo.exists(Uuid::new_v4()).await.unwrap());
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn title_search_is_case_insensitive_and_literal() {
    let test_db = TestDb::new();
    let repo = MovieRepositoryImpl::new(test_db.database());

    for title in ["The Witcher", "WITCHER: Nightmare", "100% Wolf", "Venom"] {
        repo.save(&MovieFactory::new().with_title(title).build())
            .await
            .unwrap();
    }

    let witcher = repo
        .search_by_title("witcher", PaginationParams::new(1, 10))
        .await
        .unwrap();
    assert_eq!(witcher.total_count, 2);

    let percent = repo
        .search_by_title("100%", PaginationParams::new(1, 10))
        .await
        .unwrap();
    assert_eq!(percent.total_count, 1);
    assert_eq!(percent.items[0].title, "100% Wolf");
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn user_is_loaded_with_roles() {
    let test_db = TestDb::new();
    let repo = UserRepositoryImpl::new(test_db.database());

    let user = UserFactory::new().with_username("alex@gmail.com").admin().build();
    repo.insert(&user).await.unwrap();

    let loaded = repo.find_by_username("alex@gmail.com").await.unwrap().unwrap();
    assert_eq!(loaded.id, user.id);
    assert!(loaded.has_role("ROLE_CLIENT"));
    assert!(loaded.has_role("ROLE_ADMIN"));
    assert!(repo.find_by_username("nobody@gmail.com").await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn rated_movie_cannot_be_deleted() {
    let test_db = TestDb::new();
    let services = AppServices::with_database(test_db.database());
    let users = UserRepositoryImpl::new(test_db.database());
    users
        .insert(&UserFactory::new().with_username("maria@gmail.com").build())
        .await
        .unwrap();

    let movie = services
        .movie_service
        .insert(MovieForm::new("Rated Movie", None))
        .await
        .unwrap();
    as_user(
        "maria@gmail.com",
        services.score_service.save_score(ScoreDto::new(movie.id, 3.0)),
    )
    .await
    .unwrap();

    let result = services.movie_service.delete(movie.id).await;
    assert!(matches!(result, Err(AppError::IntegrityConflict(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires TEST_DATABASE_URL"]
async fn concurrent_submissions_are_all_counted() {
    let test_db = TestDb::new();
    let services = AppServices::with_database(test_db.database());
    let users = UserRepositoryImpl::new(test_db.database());
    users
        .insert(&UserFactory::new().with_username("maria@gmail.com").build())
        .await
        .unwrap();

    let movie = services
        .movie_service
        .insert(MovieForm::new("Busy Movie", None))
        .await
        .unwrap();

    let movie_id = movie.id;
    let handles: Vec<_> = (0..50)
        .map(|i| {
            let service = services.score_service.clone();
            let value = f64::from(i % 5 + 1);
            tokio::spawn(async move {
                as_user("maria@gmail.com", service.save_score(ScoreDto::new(movie_id, value))).await
            })
        })
        .collect();

    for result in join_all(handles).await {
        result.unwrap().unwrap();
    }

    let stored = services.movie_service.find_by_id(movie.id).await.unwrap();
    assert_eq!(stored.count, 50);
    assert!((stored.score - 3.0).abs() < 1e-6);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn record_stores_rating_and_aggregate_together() {
    let test_db = TestDb::new();
    let movies = MovieRepositoryImpl::new(test_db.database());
    let scores = ScoreRepositoryImpl::new(test_db.database());
    let users = UserRepositoryImpl::new(test_db.database());
    let user = users
        .insert(&UserFactory::new().build())
        .await
        .unwrap();

    let movie = movies
        .save(&MovieFactory::new().with_aggregate(3.0, 4).build())
        .await
        .unwrap();
    let updated = scores
        .record(&Score::new(movie.id, user.id, 5.0))
        .await
        .unwrap();

    assert_eq!(updated.count, 5);
    assert!((updated.score - 3.4).abs() < 1e-6);
    assert_eq!(scores.find_by_movie(movie.id).await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn failed_record_leaves_no_rating_behind() {
    let test_db = TestDb::new();
    let scores = ScoreRepositoryImpl::new(test_db.database());
    let users = UserRepositoryImpl::new(test_db.database());
    let user = users
        .insert(&UserFactory::new().build())
        .await
        .unwrap();

    let missing = Uuid::new_v4();
    let result = scores.record(&Score::new(missing, user.id, 4.0)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(scores.find_by_movie(missing).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn search_total_agrees_with_returned_rows() {
    let test_db = TestDb::new();
    let repo = MovieRepositoryImpl::new(test_db.database());

    for i in 0..7 {
        repo.save(&MovieFactory::new().with_title(&format!("Space Odyssey {}", i)).build())
            .await
            .unwrap();
    }

    let page = repo
        .search_by_title("odyssey", PaginationParams::new(1, 50))
        .await
        .unwrap();

    assert_eq!(page.total_count, 7);
    assert_eq!(page.number_of_elements(), 7);
    assert_eq!(page.total_pages, 1);
}

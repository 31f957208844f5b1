pub mod infrastructure;
pub mod modules;
mod schema;
pub mod shared;

use std::sync::Arc;

use infrastructure::InMemoryStore;
use modules::{
    movie::{MovieRepository, MovieRepositoryImpl, MovieService},
    score::{ScoreAggregator, ScoreRepository, ScoreRepositoryImpl, ScoreService},
    user::{
        application::ports::{AuthenticationProvider, SecurityContext},
        TaskLocalSecurityContext, UserRepository, UserRepositoryImpl, UserService,
    },
};
use shared::{errors::AppResult, utils::logger::init_logger, AppConfig, Database};

/// Fully wired service layer, ready to be handed to a transport
#[derive(Clone)]
pub struct AppServices {
    pub movie_service: Arc<MovieService>,
    pub score_service: Arc<ScoreService>,
    pub user_service: Arc<UserService>,
}

impl AppServices {
    /// Wire every service against the postgres-backed repositories
    pub fn with_database(database: Arc<Database>) -> Self {
        let movie_repo: Arc<dyn MovieRepository> =
            Arc::new(MovieRepositoryImpl::new(Arc::clone(&database)));
        let score_repo: Arc<dyn ScoreRepository> =
            Arc::new(ScoreRepositoryImpl::new(Arc::clone(&database)));
        let user_repo: Arc<dyn UserRepository> =
            Arc::new(UserRepositoryImpl::new(Arc::clone(&database)));

        Self::wire(movie_repo, score_repo, user_repo)
    }

    /// Wire every service against a single in-memory store
    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        let movie_repo: Arc<dyn MovieRepository> = store.clone();
        let score_repo: Arc<dyn ScoreRepository> = store.clone();
        let user_repo: Arc<dyn UserRepository> = store;

        Self::wire(movie_repo, score_repo, user_repo)
    }

    fn wire(
        movie_repo: Arc<dyn MovieRepository>,
        score_repo: Arc<dyn ScoreRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        let security_context: Arc<dyn SecurityContext> = Arc::new(TaskLocalSecurityContext);
        let user_service = Arc::new(UserService::new(user_repo, security_context));
        let auth: Arc<dyn AuthenticationProvider> = user_service.clone();

        let aggregator = Arc::new(ScoreAggregator::new(Arc::clone(&movie_repo), score_repo));
        let score_service = Arc::new(ScoreService::new(
            auth,
            Arc::clone(&movie_repo),
            aggregator,
        ));
        let movie_service = Arc::new(MovieService::new(movie_repo));

        Self {
            movie_service,
            score_service,
            user_service,
        }
    }
}

/// Initialize logging, connect to postgres, apply pending migrations and
/// wire the services.
pub fn bootstrap(config: &AppConfig) -> AppResult<AppServices> {
    init_logger();

    let database = Arc::new(Database::new(&config.database)?);
    database.run_migrations()?;

    let services = AppServices::with_database(database);
    log::info!("Services wired against {}", config.database.redacted_url());
    Ok(services)
}

/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use dsmovie_lib::modules::{
    movie::{Movie, MovieForm},
    user::{Role, User},
};
use uuid::Uuid;

pub struct MovieFactory {
    id: Uuid,
    title: String,
    image: Option<String>,
    score: f64,
    count: u32,
}

impl Default for MovieFactory {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: format!("Test Movie {}", rand::random::<u32>() % 1_000_000),
            image: None,
            score: 0.0,
            count: 0,
        }
    }
}

impl MovieFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }

    /// Preset aggregate, as if `count` ratings averaging `score` were recorded
    pub fn with_aggregate(mut self, score: f64, count: u32) -> Self {
        self.score = score;
        self.count = count;
        self
    }

    pub fn build(self) -> Movie {
        let mut movie = Movie::new(self.title, self.image);
        movie.id = self.id;
        movie.score = self.score;
        movie.count = self.count;
        movie
    }

    pub fn form(self) -> MovieForm {
        MovieForm::new(self.title, self.image)
    }
}

pub struct UserFactory {
    username: String,
    password: String,
    authorities: Vec<String>,
}

impl Default for UserFactory {
    fn default() -> Self {
        Self {
            username: format!("user{}@gmail.com", rand::random::<u32>()),
            password: "$2a$10$eACCYoNOHEqXve8aIWT8Nu3PkMXWBaOxJ9aORUYzfMQCbVBIhZ8tG".to_string(),
            authorities: vec!["ROLE_CLIENT".to_string()],
        }
    }
}

impl UserFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: &str) -> Self {
        self.username = username.to_string();
        self
    }

    pub fn admin(mut self) -> Self {
        self.authorities.push("ROLE_ADMIN".to_string());
        self
    }

    pub fn build(self) -> User {
        let roles = self.authorities.into_iter().map(Role::new).collect();
        User::new(self.username, self.password, roles)
    }
}

pub mod modules;
mod schema;
pub mod shared;

use std::sync::Arc;

use modules::{
    films::{
        application::FilmService,
        infrastructure::{
            FilmRepositoryImpl, InMemoryFilmRepository, InMemoryLikeRepository, LikeRepositoryImpl,
        },
        FilmRepository, LikeRepository,
    },
    reference::{
        application::ReferenceService,
        infrastructure::{
            GenreRepositoryImpl, InMemoryGenreRepository, InMemoryMpaRepository, MpaRepositoryImpl,
        },
        GenreRepository, MpaRepository,
    },
    users::{
        application::UserService,
        infrastructure::{
            FriendRepositoryImpl, InMemoryFriendRepository, InMemoryUserRepository,
            UserRepositoryImpl,
        },
        FriendRepository, UserRepository,
    },
};
use shared::Database;

// Re-exports for easy external access
pub use modules::films::{Film, NewFilm, DEFAULT_POPULAR_COUNT};
pub use modules::reference::{Genre, Mpa};
pub use modules::users::{NewUser, User};
pub use shared::errors::{AppError, AppResult};
pub use shared::utils::logger::init_logger;

/// The assembled service layer. The storage backend is chosen once here;
/// services only ever see the repository traits.
pub struct AppServices {
    pub users: Arc<UserService>,
    pub films: Arc<FilmService>,
    pub reference: Arc<ReferenceService>,
}

impl AppServices {
    /// Wire every service over the map-backed stores. Reference catalogs are
    /// seeded with the same fixed data the migrations insert.
    pub fn in_memory() -> Self {
        let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let friend_repo: Arc<dyn FriendRepository> = Arc::new(InMemoryFriendRepository::new());
        let film_repo: Arc<dyn FilmRepository> = Arc::new(InMemoryFilmRepository::new());
        let like_repo: Arc<dyn LikeRepository> = Arc::new(InMemoryLikeRepository::new());
        let genre_repo: Arc<dyn GenreRepository> = Arc::new(InMemoryGenreRepository::new());
        let mpa_repo: Arc<dyn MpaRepository> = Arc::new(InMemoryMpaRepository::new());

        Self::assemble(user_repo, friend_repo, film_repo, like_repo, genre_repo, mpa_repo)
    }

    /// Wire every service over the relational stores sharing one pool.
    pub fn postgres(database: Arc<Database>) -> Self {
        let user_repo: Arc<dyn UserRepository> =
            Arc::new(UserRepositoryImpl::new(Arc::clone(&database)));
        let friend_repo: Arc<dyn FriendRepository> =
            Arc::new(FriendRepositoryImpl::new(Arc::clone(&database)));
        let film_repo: Arc<dyn FilmRepository> =
            Arc::new(FilmRepositoryImpl::new(Arc::clone(&database)));
        let like_repo: Arc<dyn LikeRepository> =
            Arc::new(LikeRepositoryImpl::new(Arc::clone(&database)));
        let genre_repo: Arc<dyn GenreRepository> =
            Arc::new(GenreRepositoryImpl::new(Arc::clone(&database)));
        let mpa_repo: Arc<dyn MpaRepository> = Arc::new(MpaRepositoryImpl::new(database));

        Self::assemble(user_repo, friend_repo, film_repo, like_repo, genre_repo, mpa_repo)
    }

    fn assemble(
        user_repo: Arc<dyn UserRepository>,
        friend_repo: Arc<dyn FriendRepository>,
        film_repo: Arc<dyn FilmRepository>,
        like_repo: Arc<dyn LikeRepository>,
        genre_repo: Arc<dyn GenreRepository>,
        mpa_repo: Arc<dyn MpaRepository>,
    ) -> Self {
        let users = Arc::new(UserService::new(user_repo, friend_repo));

        let films = Arc::new(FilmService::new(
            film_repo,
            like_repo,
            Arc::clone(&genre_repo),
            Arc::clone(&mpa_repo),
            Arc::clone(&users),
        ));

        let reference = Arc::new(ReferenceService::new(genre_repo, mpa_repo));

        Self {
            users,
            films,
            reference,
        }
    }
}

/// Connect to the database named by `DATABASE_URL` (via `.env` when present),
/// apply pending migrations and assemble the service layer over it.
pub fn bootstrap_postgres() -> AppResult<AppServices> {
    dotenvy::dotenv().ok();

    let database = Arc::new(Database::new()?);
    database.run_migrations()?;
    Ok(AppServices::postgres(database))
}

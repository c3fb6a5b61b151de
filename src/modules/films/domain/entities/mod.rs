pub mod film;

pub use film::{Film, FilmDraft, NewFilm};

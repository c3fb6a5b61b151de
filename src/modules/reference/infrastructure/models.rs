use crate::modules::reference::domain::{Genre, Mpa};
use crate::schema::{genres, mpa};
use diesel::prelude::*;

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = genres)]
pub struct GenreRow {
    pub id: i32,
    pub name: String,
}

impl GenreRow {
    pub fn into_entity(self) -> Genre {
        Genre {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = mpa)]
pub struct MpaRow {
    pub id: i32,
    pub name: String,
}

impl MpaRow {
    pub fn into_entity(self) -> Mpa {
        Mpa {
            id: self.id,
            name: self.name,
        }
    }
}

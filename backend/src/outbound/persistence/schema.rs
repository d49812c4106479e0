//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. When a migration
//! changes a table, update the matching block here (or regenerate it with
//! `diesel print-schema`).

diesel::table! {
    /// Registered users. `email` carries a unique index.
    users (id) {
        id -> Int4,
        #[max_length = 50]
        name -> Varchar,
        #[max_length = 120]
        email -> Varchar,
        /// Argon2id PHC string; never the plaintext.
        password_hash -> Varchar,
        is_active -> Bool,
    }
}

diesel::table! {
    /// Planets. `name` carries a unique index.
    planets (id) {
        id -> Int4,
        #[max_length = 50]
        name -> Varchar,
        diameter -> Nullable<Int4>,
        rotation_period -> Nullable<Int4>,
    }
}

diesel::table! {
    people (id) {
        id -> Int4,
        #[max_length = 50]
        name -> Varchar,
        height -> Nullable<Int4>,
        mass -> Nullable<Int4>,
        #[max_length = 50]
        hair_color -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// User-to-planet favourites; both references cascade on delete.
    favorites_planets (id) {
        id -> Int4,
        planet_id -> Int4,
        user_id -> Int4,
    }
}

diesel::table! {
    /// User-to-person favourites; both references cascade on delete.
    favorites_people (id) {
        id -> Int4,
        people_id -> Int4,
        user_id -> Int4,
    }
}

diesel::joinable!(favorites_planets -> planets (planet_id));
diesel::joinable!(favorites_planets -> users (user_id));
diesel::joinable!(favorites_people -> people (people_id));
diesel::joinable!(favorites_people -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    planets,
    people,
    favorites_planets,
    favorites_people,
);

//! Diesel table definitions for the inventory schema.
//!
//! These must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Catalogue items and their stock level.
    sweets (id) {
        id -> Uuid,
        #[max_length = 255]
        name -> Varchar,
        #[max_length = 100]
        category -> Varchar,
        price -> Float8,
        /// Units on hand, constrained to be non-negative.
        quantity -> Int4,
        description -> Nullable<Text>,
        image_url -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Actors known to the shop.
    profiles (id) {
        id -> Uuid,
        #[max_length = 255]
        email -> Varchar,
        is_admin -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Bearer credentials keyed by SHA-256 hex digest.
    access_tokens (token_digest) {
        #[max_length = 64]
        token_digest -> Varchar,
        profile_id -> Uuid,
        expires_at -> Nullable<Timestamptz>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only stock mutation audit trail.
    transactions (id) {
        id -> Uuid,
        sweet_id -> Uuid,
        user_id -> Uuid,
        #[max_length = 16]
        transaction_type -> Varchar,
        quantity -> Int4,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(access_tokens -> profiles (profile_id));
diesel::joinable!(transactions -> profiles (user_id));
diesel::joinable!(transactions -> sweets (sweet_id));

diesel::allow_tables_to_appear_in_same_query!(access_tokens, profiles, sweets, transactions);

//! Diesel table definitions for the catalogue schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate
//! with `diesel print-schema` after changing a migration.

diesel::table! {
    /// Garment sizes. `name` is unique (`sizes_name_key`).
    sizes (id) {
        id -> Uuid,
        /// Size label, at most 10 characters.
        name -> Varchar,
    }
}

diesel::table! {
    /// Product categories. `name` and `slug` are each unique and `name` is
    /// indexed for ordered listings.
    categories (id) {
        id -> Uuid,
        name -> Varchar,
        slug -> Varchar,
    }
}

diesel::table! {
    /// Clothing items. Rows cascade-delete with their category.
    clothing_items (id) {
        id -> Uuid,
        name -> Varchar,
        /// Unique URL slug (`clothing_items_slug_key`).
        slug -> Varchar,
        available -> Bool,
        category_id -> Uuid,
        /// Relative image path, at most 100 characters.
        image -> Nullable<Varchar>,
        created_at -> Timestamptz,
        /// Last modification timestamp (also maintained by trigger).
        updated_at -> Timestamptz,
        /// `NUMERIC(20, 2)`, checked `>= 0`.
        price -> Numeric,
        /// `NUMERIC(5, 2)`, checked within `0..=100`.
        discount -> Numeric,
        description -> Text,
    }
}

diesel::table! {
    /// Item/size pairs with per-pair availability. `(clothing_item_id,
    /// size_id)` is unique and rows cascade-delete with either parent.
    clothing_item_sizes (id) {
        id -> Uuid,
        clothing_item_id -> Uuid,
        size_id -> Uuid,
        available -> Bool,
    }
}

diesel::joinable!(clothing_items -> categories (category_id));
diesel::joinable!(clothing_item_sizes -> clothing_items (clothing_item_id));
diesel::joinable!(clothing_item_sizes -> sizes (size_id));

diesel::allow_tables_to_appear_in_same_query!(
    categories,
    clothing_item_sizes,
    clothing_items,
    sizes,
);

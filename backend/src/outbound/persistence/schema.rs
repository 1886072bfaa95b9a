//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate
//! with `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered accounts. Sign-up lives outside this service.
    users (id) {
        id -> Int4,
        email -> Varchar,
        password -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Login sessions; `token` is the bearer token handed to clients.
    sessions (id) {
        id -> Int4,
        user_id -> Int4,
        token -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// One enrollment per user.
    enrollments (id) {
        id -> Int4,
        name -> Varchar,
        cpf -> Varchar,
        birthday -> Date,
        phone -> Varchar,
        user_id -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    addresses (id) {
        id -> Int4,
        cep -> Varchar,
        street -> Varchar,
        city -> Varchar,
        state -> Varchar,
        number -> Varchar,
        neighborhood -> Varchar,
        address_detail -> Nullable<Varchar>,
        enrollment_id -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Static ticket catalogue.
    ticket_types (id) {
        id -> Int4,
        name -> Varchar,
        price -> Int4,
        is_remote -> Bool,
        includes_hotel -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Issued tickets. `status` holds `RESERVED` or `PAID`.
    tickets (id) {
        id -> Int4,
        ticket_type_id -> Int4,
        enrollment_id -> Int4,
        status -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    hotels (id) {
        id -> Int4,
        name -> Varchar,
        image -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    rooms (id) {
        id -> Int4,
        name -> Varchar,
        capacity -> Int4,
        hotel_id -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Room bookings; `user_id` is unique.
    bookings (id) {
        id -> Int4,
        user_id -> Int4,
        room_id -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(sessions -> users (user_id));
diesel::joinable!(enrollments -> users (user_id));
diesel::joinable!(addresses -> enrollments (enrollment_id));
diesel::joinable!(tickets -> enrollments (enrollment_id));
diesel::joinable!(tickets -> ticket_types (ticket_type_id));
diesel::joinable!(rooms -> hotels (hotel_id));
diesel::joinable!(bookings -> users (user_id));
diesel::joinable!(bookings -> rooms (room_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    sessions,
    enrollments,
    addresses,
    ticket_types,
    tickets,
    hotels,
    rooms,
    bookings,
);

//! Diesel schema for task persistence.

diesel::table! {
    /// Owner-scoped task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Identity that owns the task.
        owner_id -> Uuid,
        /// Task title.
        #[max_length = 500]
        title -> Varchar,
        /// Optional long-form description.
        description -> Nullable<Text>,
        /// Subject the task relates to.
        #[max_length = 200]
        topic -> Varchar,
        /// Completion flag.
        completed -> Bool,
        /// Optional grouping category.
        #[max_length = 100]
        category -> Nullable<Varchar>,
        /// Priority tag.
        #[max_length = 20]
        priority -> Varchar,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

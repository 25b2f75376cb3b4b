//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Owning project.
        project_id -> Int8,
        /// Task title.
        #[max_length = 100]
        title -> Varchar,
        /// Task description.
        #[max_length = 500]
        description -> Varchar,
        /// Board column.
        #[max_length = 50]
        status -> Varchar,
        /// Urgency.
        #[max_length = 50]
        priority -> Varchar,
        /// Free-text labels.
        labels -> Array<Text>,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Task assignee join table.
    task_assignments (task_id, user_id) {
        /// Task side of the relation.
        task_id -> Int8,
        /// User side of the relation.
        user_id -> Int8,
    }
}

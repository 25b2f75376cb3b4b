//! Diesel schema for project persistence.

diesel::table! {
    /// Project records.
    projects (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Project name.
        #[max_length = 100]
        name -> Varchar,
        /// Project description.
        #[max_length = 500]
        description -> Varchar,
        /// Status label.
        #[max_length = 50]
        status -> Varchar,
        /// Completion percentage.
        progress -> Int2,
        /// Start date.
        start_date -> Timestamptz,
        /// Optional end date.
        end_date -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Project team membership join table.
    project_teams (project_id, user_id) {
        /// Project side of the relation.
        project_id -> Int8,
        /// User side of the relation.
        user_id -> Int8,
    }
}

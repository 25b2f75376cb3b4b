//! Diesel schema for user persistence.

diesel::table! {
    /// Registered users.
    users (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Display name.
        #[max_length = 50]
        name -> Varchar,
        /// Unique, lowercase email address.
        #[max_length = 100]
        email -> Varchar,
        /// Team role.
        #[max_length = 50]
        role -> Varchar,
    }
}

//! Diesel schema for test-case persistence.

diesel::table! {
    /// Generated test cases, removed with their task.
    test_cases (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Originating task.
        task_id -> Int8,
        /// Generated Gherkin text.
        gherkin -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

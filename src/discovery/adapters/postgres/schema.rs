//! Diesel schema for discovery record persistence.

diesel::table! {
    /// Auto-discovery records, one per application submission.
    discovery_records (id) {
        /// Record identifier in 24-character hexadecimal form.
        #[max_length = 24]
        id -> Varchar,
        /// Application metadata as JSONB.
        metadata -> Jsonb,
        /// Category entry lists as JSONB.
        categories -> Jsonb,
        /// Optimistic-concurrency revision.
        revision -> Int8,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

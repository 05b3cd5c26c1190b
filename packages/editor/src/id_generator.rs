use crc32fast::Hasher;

/// Derive a stable seed from a document name using CRC32.
pub fn document_seed(name: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for nodes within a document.
///
/// Ids are `<seed>-<n>` with a monotonic counter, so every id handed out
/// in a session is unique against everything already in the document.
/// Seed-data ids ("header-1", "nav-1") live outside this namespace.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(document_name: &str) -> Self {
        Self {
            seed: document_seed(document_name),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate the next sequential id.
    pub fn next_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Advance the counter past every id of the form `<seed>-<n>` in the
    /// given set, so ids handed out next never collide with nodes that
    /// already exist (e.g. when wrapping a parsed export).
    pub fn skip_existing<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        for id in ids {
            let suffix = id
                .strip_prefix(self.seed.as_str())
                .and_then(|rest| rest.strip_prefix('-'));
            if let Some(n) = suffix.and_then(|s| s.parse::<u32>().ok()) {
                self.count = self.count.max(n);
            }
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_stable_per_name() {
        assert_eq!(document_seed("untitled"), document_seed("untitled"));
        assert_ne!(document_seed("untitled"), document_seed("landing"));
    }

    #[test]
    fn skip_existing_resumes_past_minted_ids() {
        let mut first = IdGenerator::new("untitled");
        let minted = vec![first.next_id(), first.next_id()];

        let mut resumed = IdGenerator::new("untitled");
        resumed.skip_existing(minted.iter().map(String::as_str));

        let next = resumed.next_id();
        assert!(!minted.contains(&next));
        assert!(next.ends_with("-3"));

        // Foreign ids (different seed or no counter suffix) are ignored.
        let mut fresh = IdGenerator::new("untitled");
        fresh.skip_existing(["header-1", "nav-1", "other-seed-9"]);
        assert!(fresh.next_id().ends_with("-1"));
    }

    #[test]
    fn ids_are_sequential_and_share_the_seed() {
        let mut ids = IdGenerator::new("untitled");

        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();

        assert!(a.ends_with("-1"));
        assert!(b.ends_with("-2"));
        assert!(c.ends_with("-3"));

        let seed = ids.seed().to_string();
        assert!(a.starts_with(&seed));
        assert!(c.starts_with(&seed));
    }
}

/**
 * Active-User Registry
 *
 * Tracks the set of usernames currently holding a valid session. Login
 * adds, logout removes; duplicate logins of the same user do not duplicate
 * membership.
 *
 * The set is guarded by a `std::sync::Mutex`; every operation runs entirely
 * inside the critical section, so add/remove/list are atomic with respect
 * to each other.
 */
use std::collections::HashSet;
use std::sync::Mutex;

/// Set of currently authenticated usernames
pub struct ActiveUserRegistry {
    users: Mutex<HashSet<String>>,
}

impl ActiveUserRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashSet::new()),
        }
    }

    /// Mark a user as active; redundant adds are no-ops
    pub fn add(&self, username: &str) {
        let mut users = self.users.lock().unwrap();
        users.insert(username.to_string());
    }

    /// Mark a user as no longer active; removing an absent user is a no-op
    pub fn remove(&self, username: &str) {
        let mut users = self.users.lock().unwrap();
        users.remove(username);
    }

    /// Snapshot the active users, sorted for stable output
    pub fn list(&self) -> Vec<String> {
        let users = self.users.lock().unwrap();
        let mut all: Vec<String> = users.iter().cloned().collect();
        all.sort();
        all
    }
}

impl Default for ActiveUserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

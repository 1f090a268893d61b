//! In-memory implementation of the UserRepository port

use std::collections::HashMap;

use crate::domain::result::{Error, Result};
use crate::domain::User;
use crate::ports::UserRepository;

/// Insertion-ordered user store held entirely in memory
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
    // id -> position in `users`
    index: HashMap<String, usize>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn insert(&mut self, user: User) -> Result<&User> {
        if self.index.contains_key(&user.id) {
            return Err(Error::duplicate_id(user.id));
        }

        let position = self.users.len();
        self.index.insert(user.id.clone(), position);
        self.users.push(user);
        Ok(&self.users[position])
    }

    fn get(&self, id: &str) -> Option<&User> {
        self.index.get(id).map(|&i| &self.users[i])
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut User> {
        let position = *self.index.get(id)?;
        self.users.get_mut(position)
    }

    fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    fn list(&self) -> Vec<&User> {
        self.users.iter().collect()
    }

    fn len(&self) -> usize {
        self.users.len()
    }

    fn clear(&mut self) {
        self.users.clear();
        self.index.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewUser;

    fn user(id: &str, name: &str) -> User {
        User::from_new(id, NewUser::new(name, format!("{name}@example.com"), 30), 18).unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let mut repo = InMemoryUserRepository::new();
        let stored = repo.insert(user("a", "alice")).unwrap();
        assert_eq!(stored.name, "alice");

        assert_eq!(repo.get("a").map(|u| u.name.as_str()), Some("alice"));
        assert!(repo.get("missing").is_none());
        assert!(repo.get("").is_none());
        assert!(repo.contains("a"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut repo = InMemoryUserRepository::new();
        repo.insert(user("a", "alice")).unwrap();

        let err = repo.insert(user("a", "impostor")).unwrap_err();
        assert_eq!(err, Error::DuplicateId("a".to_string()));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get("a").unwrap().name, "alice");
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut repo = InMemoryUserRepository::new();
        repo.insert(user("z", "zoe")).unwrap();
        repo.insert(user("b", "bob")).unwrap();
        repo.insert(user("m", "mia")).unwrap();

        let names: Vec<&str> = repo.list().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["zoe", "bob", "mia"]);
    }

    #[test]
    fn test_get_mut_and_clear() {
        let mut repo = InMemoryUserRepository::new();
        repo.insert(user("a", "alice")).unwrap();
        repo.get_mut("a").unwrap().deactivate();
        assert!(!repo.get("a").unwrap().is_active());

        repo.clear();
        assert_eq!(repo.len(), 0);
        assert!(repo.get("a").is_none());

        // ids are free again after a reset
        repo.insert(user("a", "again")).unwrap();
        assert_eq!(repo.len(), 1);
    }
}

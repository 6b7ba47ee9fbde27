//! Follow edges between users.
//!
//! An edge `follower -> followed` means "follower follows followed". At most
//! one edge exists per ordered pair; the reverse edge is independent.

use crate::domain::UserId;

/// Directional follow relation between two users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FollowEdge {
    follower: UserId,
    followed: UserId,
}

impl FollowEdge {
    /// Edge stating that `follower` follows `followed`.
    ///
    /// Self-follow edges are permitted.
    pub fn new(follower: UserId, followed: UserId) -> Self {
        Self { follower, followed }
    }

    pub fn follower(&self) -> UserId {
        self.follower
    }

    pub fn followed(&self) -> UserId {
        self.followed
    }

    /// The same pair pointing the other way.
    pub fn reversed(&self) -> Self {
        Self {
            follower: self.followed,
            followed: self.follower,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_swaps_direction() {
        let a = UserId::new(1).expect("valid id");
        let b = UserId::new(2).expect("valid id");
        let edge = FollowEdge::new(a, b);

        let back = edge.reversed();

        assert_eq!(back.follower(), b);
        assert_eq!(back.followed(), a);
        assert_ne!(edge, back);
    }
}

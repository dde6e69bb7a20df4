use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Incoming friend request; it only becomes a friend link once accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequest {
    pub id: String,
    pub sender: Friend,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendResponse {
    Accept,
    Decline,
}

/// Friends and pending incoming requests held by the profile page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FriendBook {
    pub friends: Vec<Friend>,
    pub incoming: Vec<FriendRequest>,
}

impl FriendBook {
    pub fn new(friends: Vec<Friend>, incoming: Vec<FriendRequest>) -> Self {
        Self { friends, incoming }
    }

    /// Applies a response the backend has accepted.
    ///
    /// Returns the new friend when the request was accepted, `None` when it was declined or the
    /// request is unknown.
    pub fn apply_response(&mut self, request_id: &str, response: FriendResponse) -> Option<Friend> {
        let index = self.incoming.iter().position(|r| r.id == request_id)?;
        let request = self.incoming.remove(index);

        match response {
            FriendResponse::Decline => None,
            FriendResponse::Accept => {
                if !self.is_friend(&request.sender.id) {
                    self.friends.push(request.sender.clone());
                }
                Some(request.sender)
            }
        }
    }

    pub fn remove_friend(&mut self, friend_id: &str) -> bool {
        let before = self.friends.len();
        self.friends.retain(|f| f.id != friend_id);
        self.friends.len() != before
    }

    pub fn is_friend(&self, user_id: &str) -> bool {
        self.friends.iter().any(|f| f.id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend(id: &str) -> Friend {
        Friend {
            id: id.to_string(),
            name: format!("User {}", id),
            avatar_url: None,
        }
    }

    fn book() -> FriendBook {
        FriendBook::new(
            vec![friend("1")],
            vec![
                FriendRequest {
                    id: "r2".to_string(),
                    sender: friend("2"),
                },
                FriendRequest {
                    id: "r3".to_string(),
                    sender: friend("3"),
                },
            ],
        )
    }

    /// Expect accepting a request to move the sender into the friend list
    #[test]
    fn accept_creates_friend_link() {
        let mut book = book();

        let added = book.apply_response("r2", FriendResponse::Accept);

        assert_eq!(added, Some(friend("2")));
        assert!(book.is_friend("2"));
        assert_eq!(book.incoming.len(), 1);
    }

    /// Expect declining a request to drop it without adding a friend
    #[test]
    fn decline_drops_request() {
        let mut book = book();

        let added = book.apply_response("r3", FriendResponse::Decline);

        assert!(added.is_none());
        assert!(!book.is_friend("3"));
        assert_eq!(book.incoming.len(), 1);
    }

    /// Expect accepting a request from an existing friend not to duplicate the link
    #[test]
    fn accept_does_not_duplicate_friend() {
        let mut book = book();
        book.incoming.push(FriendRequest {
            id: "r1".to_string(),
            sender: friend("1"),
        });

        book.apply_response("r1", FriendResponse::Accept);

        assert_eq!(book.friends.len(), 1);
    }

    /// Expect unknown request ids to leave the book untouched
    #[test]
    fn unknown_request_is_ignored() {
        let mut book = book();

        assert!(book.apply_response("missing", FriendResponse::Accept).is_none());
        assert_eq!(book, self::book());
    }

    /// Expect removing a friend to report whether anything was removed
    #[test]
    fn remove_friend_reports_change() {
        let mut book = book();

        assert!(book.remove_friend("1"));
        assert!(!book.remove_friend("1"));
    }
}

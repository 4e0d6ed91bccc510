use std::fmt;

use crate::models::SocialDoc;

/// Rejected social operations. Handlers map these onto HTTP statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialError {
    SelfReference,
    AlreadyFriends,
    AlreadyRequested,
    NoPendingRequest,
    NotFriends,
}

impl fmt::Display for SocialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            SocialError::SelfReference => "you cannot friend yourself",
            SocialError::AlreadyFriends => "already friends",
            SocialError::AlreadyRequested => "a request between you is already pending",
            SocialError::NoPendingRequest => "no pending request from that user",
            SocialError::NotFriends => "you are not friends with that user",
        };
        f.write_str(message)
    }
}

/// Records the request on both sides; the caller persists both documents
/// in one write.
pub fn send_request(
    me: &mut SocialDoc,
    them: &mut SocialDoc,
    my_uid: &str,
    their_uid: &str,
) -> Result<(), SocialError> {
    if my_uid == their_uid {
        return Err(SocialError::SelfReference);
    }
    if me.friends.contains(their_uid) {
        return Err(SocialError::AlreadyFriends);
    }
    if me.sent_requests.contains(their_uid) || me.received_requests.contains(their_uid) {
        return Err(SocialError::AlreadyRequested);
    }

    me.sent_requests.insert(their_uid.to_string());
    them.received_requests.insert(my_uid.to_string());
    Ok(())
}

pub fn cancel_request(
    me: &mut SocialDoc,
    them: &mut SocialDoc,
    my_uid: &str,
    their_uid: &str,
) -> Result<(), SocialError> {
    if !me.sent_requests.contains(their_uid) {
        return Err(SocialError::NoPendingRequest);
    }

    me.sent_requests.remove(their_uid);
    them.received_requests.remove(my_uid);
    Ok(())
}

pub fn accept_request(
    me: &mut SocialDoc,
    them: &mut SocialDoc,
    my_uid: &str,
    their_uid: &str,
) -> Result<(), SocialError> {
    if !me.received_requests.contains(their_uid) {
        return Err(SocialError::NoPendingRequest);
    }

    me.received_requests.remove(their_uid);
    me.friends.insert(their_uid.to_string());
    them.sent_requests.remove(my_uid);
    them.friends.insert(my_uid.to_string());
    Ok(())
}

pub fn reject_request(
    me: &mut SocialDoc,
    them: &mut SocialDoc,
    my_uid: &str,
    their_uid: &str,
) -> Result<(), SocialError> {
    if !me.received_requests.contains(their_uid) {
        return Err(SocialError::NoPendingRequest);
    }

    me.received_requests.remove(their_uid);
    them.sent_requests.remove(my_uid);
    Ok(())
}

pub fn remove_friend(
    me: &mut SocialDoc,
    them: &mut SocialDoc,
    my_uid: &str,
    their_uid: &str,
) -> Result<(), SocialError> {
    if !me.friends.contains(their_uid) {
        return Err(SocialError::NotFriends);
    }

    me.friends.remove(their_uid);
    them.friends.remove(my_uid);
    Ok(())
}

pub fn relationship(me: &SocialDoc, other_uid: &str) -> &'static str {
    if me.friends.contains(other_uid) {
        "friends"
    } else if me.sent_requests.contains(other_uid) {
        "requested"
    } else if me.received_requests.contains(other_uid) {
        "incoming"
    } else {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_symmetric(a: &SocialDoc, b: &SocialDoc, a_uid: &str, b_uid: &str) {
        assert_eq!(a.friends.contains(b_uid), b.friends.contains(a_uid));
        assert_eq!(a.sent_requests.contains(b_uid), b.received_requests.contains(a_uid));
        assert_eq!(a.received_requests.contains(b_uid), b.sent_requests.contains(a_uid));
    }

    #[test]
    fn request_lifecycle_send_accept() {
        let mut alice = SocialDoc::default();
        let mut bob = SocialDoc::default();

        send_request(&mut alice, &mut bob, "alice", "bob").unwrap();
        assert_eq!(relationship(&alice, "bob"), "requested");
        assert_eq!(relationship(&bob, "alice"), "incoming");
        assert_symmetric(&alice, &bob, "alice", "bob");

        accept_request(&mut bob, &mut alice, "bob", "alice").unwrap();
        assert_eq!(relationship(&alice, "bob"), "friends");
        assert_eq!(relationship(&bob, "alice"), "friends");
        assert!(alice.sent_requests.is_empty());
        assert!(bob.received_requests.is_empty());
        assert_symmetric(&alice, &bob, "alice", "bob");
    }

    #[test]
    fn request_lifecycle_send_reject() {
        let mut alice = SocialDoc::default();
        let mut bob = SocialDoc::default();

        send_request(&mut alice, &mut bob, "alice", "bob").unwrap();
        reject_request(&mut bob, &mut alice, "bob", "alice").unwrap();

        assert_eq!(relationship(&alice, "bob"), "none");
        assert_eq!(relationship(&bob, "alice"), "none");
        assert_symmetric(&alice, &bob, "alice", "bob");
    }

    #[test]
    fn sender_can_cancel_a_pending_request() {
        let mut alice = SocialDoc::default();
        let mut bob = SocialDoc::default();

        send_request(&mut alice, &mut bob, "alice", "bob").unwrap();
        cancel_request(&mut alice, &mut bob, "alice", "bob").unwrap();

        assert_eq!(relationship(&alice, "bob"), "none");
        assert!(bob.received_requests.is_empty());
    }

    #[test]
    fn duplicate_and_self_requests_are_rejected() {
        let mut alice = SocialDoc::default();
        let mut bob = SocialDoc::default();

        assert_eq!(
            send_request(&mut alice, &mut bob, "alice", "alice"),
            Err(SocialError::SelfReference)
        );

        send_request(&mut alice, &mut bob, "alice", "bob").unwrap();
        assert_eq!(
            send_request(&mut alice, &mut bob, "alice", "bob"),
            Err(SocialError::AlreadyRequested)
        );
        // Bob answering with his own request is also a duplicate.
        assert_eq!(
            send_request(&mut bob, &mut alice, "bob", "alice"),
            Err(SocialError::AlreadyRequested)
        );

        accept_request(&mut bob, &mut alice, "bob", "alice").unwrap();
        assert_eq!(
            send_request(&mut alice, &mut bob, "alice", "bob"),
            Err(SocialError::AlreadyFriends)
        );
    }

    #[test]
    fn accepting_without_a_request_fails() {
        let mut alice = SocialDoc::default();
        let mut bob = SocialDoc::default();
        assert_eq!(
            accept_request(&mut bob, &mut alice, "bob", "alice"),
            Err(SocialError::NoPendingRequest)
        );
    }

    #[test]
    fn unfriending_clears_both_sides() {
        let mut alice = SocialDoc::default();
        let mut bob = SocialDoc::default();

        send_request(&mut alice, &mut bob, "alice", "bob").unwrap();
        accept_request(&mut bob, &mut alice, "bob", "alice").unwrap();
        remove_friend(&mut alice, &mut bob, "alice", "bob").unwrap();

        assert_eq!(relationship(&alice, "bob"), "none");
        assert_eq!(relationship(&bob, "alice"), "none");
        assert_eq!(
            remove_friend(&mut alice, &mut bob, "alice", "bob"),
            Err(SocialError::NotFriends)
        );
    }
}

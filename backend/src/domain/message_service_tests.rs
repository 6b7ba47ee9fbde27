//! Tests for the message service.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use rstest::rstest;

use super::*;
use crate::domain::ports::{MockMessageRepository, MockUserRepository};
use crate::domain::{ErrorCode, MessageDraft, User, UserDraft};

fn user_id(raw: i64) -> UserId {
    UserId::new(raw).expect("valid user id")
}

fn message_id(raw: i64) -> MessageId {
    MessageId::new(raw).expect("valid message id")
}

fn owner(id: i64) -> User {
    let at = Utc::now();
    User::new(UserDraft {
        id: user_id(id),
        name: "Owner".to_owned(),
        email: "owner@example.com".to_owned(),
        created_at: at,
        updated_at: at,
    })
}

fn stored_message(id: i64, owner_id: i64, content: &str) -> Message {
    let at = Utc::now();
    Message::new(MessageDraft {
        id: message_id(id),
        user_id: user_id(owner_id),
        content: content.to_owned(),
        created_at: at,
        updated_at: at,
    })
}

fn users_with(id: i64) -> MockUserRepository {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .with(eq(user_id(id)))
        .returning(move |_| Ok(Some(owner(id))));
    users
}

fn users_without_any() -> MockUserRepository {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().returning(|_| Ok(None));
    users
}

#[tokio::test]
async fn create_message_links_message_to_owner() {
    let mut messages = MockMessageRepository::new();
    messages
        .expect_insert()
        .withf(|owner, message| *owner == user_id(4) && message.content() == "hi")
        .times(1)
        .returning(|owner, message| Ok(stored_message(10, owner.get(), message.content())));

    let service = MessageService::new(Arc::new(users_with(4)), Arc::new(messages));
    let created = service
        .create_message(user_id(4), NewMessage::new("hi"))
        .await
        .expect("create succeeds");

    assert_eq!(created.user_id(), user_id(4));
    assert_eq!(created.content(), "hi");
}

#[tokio::test]
async fn create_message_for_missing_user_is_not_found() {
    let mut messages = MockMessageRepository::new();
    messages.expect_insert().times(0);

    let service = MessageService::new(Arc::new(users_without_any()), Arc::new(messages));
    let err = service
        .create_message(user_id(4), NewMessage::new("hi"))
        .await
        .expect_err("owner is missing");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn list_user_messages_requires_existing_user() {
    let mut messages = MockMessageRepository::new();
    messages.expect_list_for_user().times(0);

    let service = MessageService::new(Arc::new(users_without_any()), Arc::new(messages));
    let err = service
        .list_user_messages(user_id(5))
        .await
        .expect_err("owner is missing");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn get_message_maps_missing_row_to_not_found() {
    let mut messages = MockMessageRepository::new();
    messages.expect_find_by_id().return_once(|_| Ok(None));

    let service = MessageService::new(Arc::new(MockUserRepository::new()), Arc::new(messages));
    let err = service
        .get_message(message_id(99))
        .await
        .expect_err("missing message");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "message 99 not found");
}

#[rstest]
#[case(true, None)]
#[case(false, Some(ErrorCode::NotFound))]
#[tokio::test]
async fn delete_message_reports_missing_rows(
    #[case] deleted: bool,
    #[case] expected: Option<ErrorCode>,
) {
    let mut messages = MockMessageRepository::new();
    messages
        .expect_delete()
        .with(eq(message_id(3)))
        .return_once(move |_| Ok(deleted));

    let service = MessageService::new(Arc::new(MockUserRepository::new()), Arc::new(messages));
    let result = service.delete_message(message_id(3)).await;

    assert_eq!(result.err().map(|err| err.code()), expected);
}

#[tokio::test]
async fn update_message_maps_connection_failure_to_service_unavailable() {
    let mut messages = MockMessageRepository::new();
    messages
        .expect_update()
        .return_once(|_, _| Err(MessagePersistenceError::connection("pool exhausted")));

    let service = MessageService::new(Arc::new(MockUserRepository::new()), Arc::new(messages));
    let changes = MessageChanges::new(Some("edited".to_owned()));
    let err = service
        .update_message(message_id(1), changes)
        .await
        .expect_err("connection failure");

    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
}

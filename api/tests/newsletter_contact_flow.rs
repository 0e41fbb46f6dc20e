mod common;

use common::TestContext;
use smartbusflow::application::ports::subscriber_repository::SubscriberRepository;
use smartbusflow::application::use_cases::contact::submit_message::{
    ContactRequest, SubmitContactMessage,
};
use smartbusflow::application::use_cases::newsletter::subscribe::{
    Subscribe, SubscribeError, SubscribeOutcome,
};

#[tokio::test]
async fn subscribing_twice_keeps_one_row() {
    let t = TestContext::new();
    let uc = Subscribe {
        repo: t.subscribers.as_ref(),
        notifier: t.notifier.as_ref(),
    };

    let first = uc.execute(Some("rider@example.com")).await.unwrap();
    assert!(matches!(first, SubscribeOutcome::Subscribed(_)));
    let second = uc.execute(Some("rider@example.com")).await.unwrap();
    assert!(matches!(second, SubscribeOutcome::AlreadySubscribed));

    assert_eq!(t.subscribers.count(), 1);
    // welcome mail only for the first, successful subscription
    let sent = t.notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "rider@example.com");
}

#[tokio::test]
async fn missing_email_is_a_validation_failure() {
    let t = TestContext::new();
    let uc = Subscribe {
        repo: t.subscribers.as_ref(),
        notifier: t.notifier.as_ref(),
    };
    assert!(matches!(
        uc.execute(None).await,
        Err(SubscribeError::MissingEmail)
    ));
    assert!(matches!(
        uc.execute(Some("   ")).await,
        Err(SubscribeError::MissingEmail)
    ));
    assert_eq!(t.subscribers.count(), 0);
    assert!(t.notifier.sent().is_empty());
}

#[tokio::test]
async fn failed_welcome_mail_does_not_undo_subscription() {
    let t = TestContext::with_failing_notifier();
    let uc = Subscribe {
        repo: t.subscribers.as_ref(),
        notifier: t.notifier.as_ref(),
    };
    let outcome = uc.execute(Some("rider@example.com")).await.unwrap();
    assert!(matches!(outcome, SubscribeOutcome::Subscribed(_)));
    assert_eq!(t.notifier.sent().len(), 1);
    assert_eq!(t.subscribers.list_subscribers().await.unwrap().len(), 1);
}

#[tokio::test]
async fn empty_contact_message_is_still_stored() {
    let t = TestContext::new();
    let uc = SubmitContactMessage {
        repo: t.messages.as_ref(),
        notifier: t.notifier.as_ref(),
        admin_email: None,
    };
    let saved = uc
        .execute(&ContactRequest {
            name: String::new(),
            email: "not-an-email".into(),
            message: String::new(),
        })
        .await
        .unwrap();
    assert_eq!(saved.message, "");
    assert_eq!(t.messages.all().len(), 1);
    // no admin address configured: nothing attempted
    assert!(t.notifier.sent().is_empty());
}

#[tokio::test]
async fn contact_notifies_admin_and_ignores_delivery_failure() {
    let t = TestContext::with_failing_notifier();
    let uc = SubmitContactMessage {
        repo: t.messages.as_ref(),
        notifier: t.notifier.as_ref(),
        admin_email: Some("ops@smartbusflow.local"),
    };
    let saved = uc
        .execute(&ContactRequest {
            name: "Kiran".into(),
            email: "kiran@example.com".into(),
            message: "Route 305 was early today.".into(),
        })
        .await
        .unwrap();
    assert_eq!(saved.name, "Kiran");

    let sent = t.notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "ops@smartbusflow.local");
    assert!(sent[0].subject.contains("Kiran"));
    assert!(sent[0].body.contains("Route 305 was early today."));
}

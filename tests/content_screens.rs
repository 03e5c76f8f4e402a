//! Settings, folder and flashcard editor holders driven by fake repositories.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{
    assert_no_event, flashcard, next_event, session, signed_in_session, wait_for,
    FakeAuthRepository, FakeFlashCardRepository, FakeFolderRepository, USER_ID,
};
use quickmem::domain::{FlashCard, Folder, LanguageCode, UploadedImage};
use quickmem::ui::create_flashcard::{
    CreateFlashCardAction, CreateFlashCardEvent, CreateFlashCardViewModel,
};
use quickmem::ui::create_folder::{CreateFolderAction, CreateFolderEvent, CreateFolderViewModel};
use quickmem::ui::edit_flashcard::{EditFlashCardAction, EditFlashCardEvent, EditFlashCardViewModel};
use quickmem::ui::flashcard_form::FormEdit;
use quickmem::ui::mvi::StateHolder;
use quickmem::ui::settings::{
    ChangeType, SettingsAction, SettingsEvent, SettingsViewModel, PASSWORD_INCORRECT,
};
use quickmem::validation::{DEFINITION_REQUIRED, TERM_REQUIRED, TITLE_REQUIRED};

// -- Settings ---

#[tokio::test]
async fn test_settings_starts_from_cached_profile() {
    let session = signed_in_session();
    session.app.save_language(LanguageCode::Vi).unwrap();
    let vm = SettingsViewModel::new(
        Arc::new(FakeAuthRepository::default()),
        session.tokens.clone(),
        session.app.clone(),
    );

    let state = vm.state();
    assert_eq!(state.user_id, USER_ID);
    assert_eq!(state.username, "jane");
    assert_eq!(state.language, LanguageCode::Vi);
    assert!(!state.is_push_notifications_enabled);
}

#[tokio::test]
async fn test_correct_password_navigates_to_editor() {
    let auth = Arc::new(FakeAuthRepository::default());
    auth.verify_password.push_ok(true);
    let session = signed_in_session();
    let vm = SettingsViewModel::new(auth.clone(), session.tokens.clone(), session.app.clone());
    let mut events = vm.subscribe_events();

    vm.handle(SettingsAction::ChangeTypeChanged(ChangeType::Username));
    vm.handle(SettingsAction::PasswordChanged("Secret1!".into()));
    vm.handle(SettingsAction::Submit);

    assert_eq!(
        next_event(&mut events).await,
        SettingsEvent::NavigateToChangeUsername
    );
    let state = vm.state();
    assert!(state.can_change_info);
    assert!(state.password.is_empty());
    assert!(!state.is_loading);

    let request = auth.verify_password.requests().remove(0);
    assert_eq!(request.user_id, USER_ID);
    assert_eq!(request.password, "Secret1!");
}

#[tokio::test]
async fn test_wrong_password_shows_inline_error() {
    let auth = Arc::new(FakeAuthRepository::default());
    auth.verify_password.push_ok(false);
    auth.verify_password.push_err("Backend error: 500 - boom");
    let session = signed_in_session();
    let vm = SettingsViewModel::new(auth.clone(), session.tokens.clone(), session.app.clone());
    let mut events = vm.subscribe_events();
    let mut state_rx = vm.subscribe_state();

    vm.handle(SettingsAction::ChangeTypeChanged(ChangeType::Email));
    vm.handle(SettingsAction::PasswordChanged("nope".into()));
    vm.handle(SettingsAction::Submit);
    let state = wait_for(&mut state_rx, |s| !s.error_message.is_empty()).await;
    assert_eq!(state.error_message, PASSWORD_INCORRECT);
    assert!(!state.can_change_info);

    vm.handle(SettingsAction::PasswordChanged("still nope".into()));
    assert!(vm.state().error_message.is_empty());
    vm.handle(SettingsAction::Submit);
    let state = wait_for(&mut state_rx, |s| !s.error_message.is_empty()).await;
    assert_eq!(state.error_message, PASSWORD_INCORRECT);

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_no_event(&mut events);
}

#[tokio::test]
async fn test_preferences_persist() {
    let session = signed_in_session();
    let vm = SettingsViewModel::new(
        Arc::new(FakeAuthRepository::default()),
        session.tokens.clone(),
        session.app.clone(),
    );

    vm.handle(SettingsAction::PushNotificationsChanged(true));
    vm.handle(SettingsAction::AppPushNotificationsChanged(true));
    vm.handle(SettingsAction::LanguageChanged(LanguageCode::Vi));

    assert!(vm.state().is_push_notifications_enabled);
    assert!(session.app.push_notifications());
    assert!(session.app.app_push_notifications());
    assert_eq!(session.app.language(), LanguageCode::Vi);
}

#[tokio::test]
async fn test_logout_clears_session_and_navigates() {
    let session = signed_in_session();
    session.app.save_push_notifications(true).unwrap();
    let vm = SettingsViewModel::new(
        Arc::new(FakeAuthRepository::default()),
        session.tokens.clone(),
        session.app.clone(),
    );
    let mut events = vm.subscribe_events();

    vm.handle(SettingsAction::Logout);

    assert_eq!(next_event(&mut events).await, SettingsEvent::NavigateToLogin);
    assert!(session.tokens.access_token().is_none());
    assert!(session.tokens.refresh_token().is_none());
    assert!(!session.app.is_logged_in());
    assert!(session.app.user_id().is_empty());
    assert!(!session.app.push_notifications());

    let state = vm.state();
    assert!(state.user_id.is_empty());
    assert!(!state.is_push_notifications_enabled);
}

#[tokio::test]
async fn test_submit_without_token_reports_error() {
    let auth = Arc::new(FakeAuthRepository::default());
    let session = session();
    let vm = SettingsViewModel::new(auth.clone(), session.tokens.clone(), session.app.clone());
    let mut events = vm.subscribe_events();

    vm.handle(SettingsAction::Submit);

    assert!(matches!(
        next_event(&mut events).await,
        SettingsEvent::ShowError(_)
    ));
    assert_eq!(auth.verify_password.call_count(), 0);
}

// -- Create folder ---

#[tokio::test]
async fn test_folder_requires_title() {
    let folders = Arc::new(FakeFolderRepository::default());
    let session = signed_in_session();
    let vm = CreateFolderViewModel::new(folders.clone(), session.tokens.clone(), session.app.clone());

    vm.handle(CreateFolderAction::TitleChanged("   ".into()));
    vm.handle(CreateFolderAction::SaveClicked);

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(vm.state().title_error, TITLE_REQUIRED);
    assert_eq!(folders.create.call_count(), 0);
}

#[tokio::test]
async fn test_folder_created_for_current_user() {
    let folders = Arc::new(FakeFolderRepository::default());
    folders.create.push_ok(Folder {
        id: "folder-9".into(),
        title: "Biology".into(),
        description: "Semester 1".into(),
        is_public: true,
        owner_id: USER_ID.into(),
        study_set_count: 0,
    });
    let session = signed_in_session();
    let vm = CreateFolderViewModel::new(folders.clone(), session.tokens.clone(), session.app.clone());
    let mut events = vm.subscribe_events();

    vm.handle(CreateFolderAction::TitleChanged(" Biology ".into()));
    vm.handle(CreateFolderAction::DescriptionChanged("Semester 1".into()));
    vm.handle(CreateFolderAction::PublicChanged(true));
    vm.handle(CreateFolderAction::SaveClicked);

    assert_eq!(
        next_event(&mut events).await,
        CreateFolderEvent::FolderCreated {
            id: "folder-9".into()
        }
    );
    let request = folders.create.requests().remove(0);
    assert_eq!(request.title, "Biology");
    assert_eq!(request.owner_id, USER_ID);
    assert!(request.is_public);
    assert!(!vm.state().is_loading);
}

#[tokio::test]
async fn test_repeated_folder_save_keeps_confirmed_fields() {
    let folders = Arc::new(FakeFolderRepository::default());
    for id in ["folder-1", "folder-2"] {
        folders.create.push_ok(Folder {
            id: id.into(),
            title: "Biology".into(),
            description: String::new(),
            is_public: false,
            owner_id: USER_ID.into(),
            study_set_count: 0,
        });
    }
    let session = signed_in_session();
    let vm = CreateFolderViewModel::new(folders.clone(), session.tokens.clone(), session.app.clone());
    let mut events = vm.subscribe_events();

    vm.handle(CreateFolderAction::TitleChanged("Biology".into()));
    vm.handle(CreateFolderAction::SaveClicked);
    assert_eq!(
        next_event(&mut events).await,
        CreateFolderEvent::FolderCreated {
            id: "folder-1".into()
        }
    );
    let first_state = vm.state();
    tokio::time::sleep(Duration::from_millis(10)).await;

    vm.handle(CreateFolderAction::SaveClicked);
    assert_eq!(
        next_event(&mut events).await,
        CreateFolderEvent::FolderCreated {
            id: "folder-2".into()
        }
    );

    assert_eq!(vm.state(), first_state);
    let requests = folders.create.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
}

#[tokio::test]
async fn test_folder_failure_shows_error() {
    let folders = Arc::new(FakeFolderRepository::default());
    folders.create.push_err("Folder limit reached");
    let session = signed_in_session();
    let vm = CreateFolderViewModel::new(folders.clone(), session.tokens.clone(), session.app.clone());
    let mut events = vm.subscribe_events();

    vm.handle(CreateFolderAction::TitleChanged("Biology".into()));
    vm.handle(CreateFolderAction::SaveClicked);

    assert_eq!(
        next_event(&mut events).await,
        CreateFolderEvent::ShowError("Folder limit reached".into())
    );
    assert_eq!(vm.state().title, "Biology");
}

// -- Create flashcard ---

#[tokio::test]
async fn test_create_flashcard_validates_before_sending() {
    let cards = Arc::new(FakeFlashCardRepository::default());
    let session = signed_in_session();
    let vm = CreateFlashCardViewModel::new(cards.clone(), session.tokens.clone());

    vm.handle(CreateFlashCardAction::Init {
        study_set_id: "set-1".into(),
    });
    vm.handle(CreateFlashCardAction::SaveFlashCard);

    tokio::time::sleep(Duration::from_millis(20)).await;
    let state = vm.state();
    assert_eq!(state.form.term_error, TERM_REQUIRED);
    assert_eq!(state.form.definition_error, DEFINITION_REQUIRED);
    assert_eq!(cards.create.call_count(), 0);
}

#[tokio::test]
async fn test_create_flashcard_sends_visible_extras_and_resets_form() {
    let cards = Arc::new(FakeFlashCardRepository::default());
    cards.create.push_ok(flashcard("card-1"));
    let session = signed_in_session();
    let vm = CreateFlashCardViewModel::new(cards.clone(), session.tokens.clone());
    let mut events = vm.subscribe_events();

    vm.handle(CreateFlashCardAction::Init {
        study_set_id: "set-1".into(),
    });
    vm.handle(CreateFlashCardAction::Form(FormEdit::TermChanged("cell".into())));
    vm.handle(CreateFlashCardAction::Form(FormEdit::DefinitionChanged(
        "unit of life".into(),
    )));
    vm.handle(CreateFlashCardAction::Form(FormEdit::HintChanged("small".into())));
    vm.handle(CreateFlashCardAction::Form(FormEdit::ShowHintClicked(true)));
    vm.handle(CreateFlashCardAction::Form(FormEdit::ExplanationChanged(
        "hidden".into(),
    )));
    vm.handle(CreateFlashCardAction::SaveFlashCard);

    assert_eq!(
        next_event(&mut events).await,
        CreateFlashCardEvent::FlashCardSaved(flashcard("card-1"))
    );

    let request = cards.create.requests().remove(0);
    assert_eq!(request.study_set_id, "set-1");
    assert_eq!(request.hint.as_deref(), Some("small"));
    assert_eq!(request.explanation, None);

    let state = vm.state();
    assert_eq!(state.study_set_id, "set-1");
    assert!(state.form.term.is_empty());
    assert!(!state.is_loading);
}

#[tokio::test]
async fn test_upload_sets_definition_image() {
    let cards = Arc::new(FakeFlashCardRepository::default());
    cards.upload.push_ok(UploadedImage {
        url: "https://cdn.example.com/cell.png".into(),
        id: "img-1".into(),
    });
    let session = signed_in_session();
    let vm = CreateFlashCardViewModel::new(cards.clone(), session.tokens.clone());
    let mut events = vm.subscribe_events();

    vm.handle(CreateFlashCardAction::UploadImage {
        file_name: "cell.png".into(),
        bytes: vec![1, 2, 3],
    });

    assert_eq!(
        next_event(&mut events).await,
        CreateFlashCardEvent::ImageUploaded("https://cdn.example.com/cell.png".into())
    );
    let state = vm.state();
    assert!(!state.is_uploading);
    assert_eq!(
        state.form.definition_image_url.as_deref(),
        Some("https://cdn.example.com/cell.png")
    );
    assert_eq!(cards.upload.requests()[0].0, "cell.png");
}

#[tokio::test]
async fn test_upload_failure_keeps_form() {
    let cards = Arc::new(FakeFlashCardRepository::default());
    cards.upload.push_err("File too large");
    let session = signed_in_session();
    let vm = CreateFlashCardViewModel::new(cards.clone(), session.tokens.clone());
    let mut events = vm.subscribe_events();

    vm.handle(CreateFlashCardAction::Form(FormEdit::TermChanged("cell".into())));
    vm.handle(CreateFlashCardAction::UploadImage {
        file_name: "cell.png".into(),
        bytes: vec![1],
    });

    assert_eq!(
        next_event(&mut events).await,
        CreateFlashCardEvent::ImageUploadError("File too large".into())
    );
    let state = vm.state();
    assert_eq!(state.form.term, "cell");
    assert!(state.form.definition_image_url.is_none());
}

// -- Edit flashcard ---

fn card_with_hint() -> FlashCard {
    FlashCard {
        hint: Some("small".into()),
        ..flashcard("card-7")
    }
}

#[tokio::test]
async fn test_edit_flashcard_updates_existing_card() {
    let cards = Arc::new(FakeFlashCardRepository::default());
    let updated = FlashCard {
        term: "nucleus".into(),
        ..card_with_hint()
    };
    cards.update.push_ok(updated.clone());
    let session = signed_in_session();
    let vm = EditFlashCardViewModel::new(cards.clone(), session.tokens.clone());
    let mut events = vm.subscribe_events();

    vm.handle(EditFlashCardAction::Load {
        flashcard: card_with_hint(),
    });
    let state = vm.state();
    assert_eq!(state.flashcard_id, "card-7");
    assert!(state.form.show_hint);

    vm.handle(EditFlashCardAction::Form(FormEdit::TermChanged("nucleus".into())));
    vm.handle(EditFlashCardAction::Form(FormEdit::ShowHintClicked(false)));
    vm.handle(EditFlashCardAction::SaveFlashCard);

    assert_eq!(
        next_event(&mut events).await,
        EditFlashCardEvent::FlashCardUpdated(updated)
    );
    let (id, request) = cards.update.requests().remove(0);
    assert_eq!(id, "card-7");
    assert_eq!(request.term, "nucleus");
    assert_eq!(request.hint, None);
    assert!(!vm.state().is_loading);
}

#[tokio::test]
async fn test_edit_flashcard_failure_reports_message() {
    let cards = Arc::new(FakeFlashCardRepository::default());
    cards.update.push_err("Flashcard not found");
    let session = signed_in_session();
    let vm = EditFlashCardViewModel::new(cards.clone(), session.tokens.clone());
    let mut events = vm.subscribe_events();

    vm.handle(EditFlashCardAction::Load {
        flashcard: card_with_hint(),
    });
    vm.handle(EditFlashCardAction::SaveFlashCard);

    assert_eq!(
        next_event(&mut events).await,
        EditFlashCardEvent::FlashCardUpdateError("Flashcard not found".into())
    );
    assert!(!vm.state().is_loading);
}

use super::*;
use crate::player::test_utils::RecordingPlayer;
use crate::prompt::test_utils::ScriptedPrompt;
use crate::router::test_utils::RecordingRouter;
use crate::transport::fake::FakeTransport;
use crate::video::model::AudioSource;
use std::cell::Cell;
use url::Url;

const VIDEO_ID: &str = "cjld2cjxh0000";
const OTHER_VIDEO_ID: &str = "cjld2cjxh0001";

fn record(id: &str) -> VideoRecord {
	VideoRecord::builder()
		.id(id)
		.origin_id("dQw4w9WgXcQ")
		.title("Tiêu đề")
		.author("Rick")
		.build()
}

fn record_with_audio(id: &str) -> VideoRecord {
	VideoRecord {
		audio: vec![AudioSource {
			id: "a1".into(),
			source: "https://cdn.example/a1.mp3".into(),
		}],
		..record(id)
	}
}

fn page(form_factor: FormFactor) -> WatchPage {
	WatchPage::new(VideoId::from(VIDEO_ID), form_factor, CredentialGate::default())
}

fn site() -> Site {
	Site {
		url: Url::parse("http://danni.tv").expect("Invalid URL"),
		facebook_app_id: "444940199652956".to_string(),
	}
}

/// Loads a record with alternate audio and mounts a recording secondary player.
async fn synchronized_page(form_factor: FormFactor) -> (WatchPage, RecordingPlayer) {
	let transport = FakeTransport::with_video(record_with_audio(VIDEO_ID));
	let mut page = page(form_factor);
	page.load(&transport).await;

	let player = RecordingPlayer::default();
	let mounted_player = player.clone();
	assert!(page.mount_secondary_player(move |_| Box::new(mounted_player)));
	(page, player)
}

#[tokio::test]
async fn should_start_loading_and_not_playing() {
	let page = page(FormFactor::Desktop);

	assert_eq!(&FetchState::Loading, page.fetch_state());
	assert_eq!(WatchView::Loading, page.view(&site()));
	assert!(!page.playback().is_playing);
}

#[tokio::test]
async fn should_load_record() {
	let transport = FakeTransport::with_video(record(VIDEO_ID));
	let mut page = page(FormFactor::Desktop);

	page.load(&transport).await;

	assert_eq!(Some(&record(VIDEO_ID)), page.record());
	assert!(matches!(page.view(&site()), WatchView::Ready(_)));
	assert_eq!(vec![VideoId::from(VIDEO_ID)], *transport.queried.lock());
}

#[tokio::test]
async fn should_show_not_found_for_missing_record() {
	let transport = FakeTransport::default();
	let mut page = page(FormFactor::Desktop);

	page.load(&transport).await;

	assert_eq!(
		WatchView::NotFound {
			video_id: VideoId::from(VIDEO_ID)
		},
		page.view(&site())
	);
}

#[tokio::test]
async fn should_show_fetch_failure() {
	let transport = FakeTransport::default();
	transport.fail_with("Network down");
	let mut page = page(FormFactor::Desktop);

	page.load(&transport).await;

	assert_eq!(
		WatchView::Failed {
			message: "GraphQL error: Network down".to_string()
		},
		page.view(&site())
	);
	assert_eq!(1, transport.queried.lock().len(), "Must not retry");
}

#[tokio::test]
async fn should_not_instantiate_secondary_player_without_secondary_audio() {
	let transport = FakeTransport::with_video(record(VIDEO_ID));
	let mut page = page(FormFactor::Desktop);
	page.load(&transport).await;
	let factory_calls = Cell::new(0);

	let mounted = page.mount_secondary_player(|_| {
		factory_calls.set(factory_calls.get() + 1);
		Box::new(RecordingPlayer::default())
	});

	assert!(!mounted);
	assert_eq!(0, factory_calls.get());
	assert!(!page.has_secondary_player());
}

#[tokio::test]
async fn should_keep_synchronizer_inactive_without_secondary_audio() {
	let transport = FakeTransport::with_video(record(VIDEO_ID));
	let mut page = page(FormFactor::Desktop);
	page.load(&transport).await;

	page.on_secondary_progress(5.0);
	let correction = page.on_primary_progress(10.0);

	assert_eq!(None, correction);
	assert_eq!(0.0, page.playback().secondary_position());
}

#[tokio::test]
async fn should_not_instantiate_secondary_player_before_loading() {
	let mut page = page(FormFactor::Desktop);

	assert!(!page.mount_secondary_player(|_| Box::new(RecordingPlayer::default())));
}

#[tokio::test]
async fn should_instantiate_secondary_player_once_with_audio_source() {
	let (mut page, _) = synchronized_page(FormFactor::Desktop).await;
	let factory_calls = Cell::new(0);

	let mounted = page.mount_secondary_player(|_| {
		factory_calls.set(factory_calls.get() + 1);
		Box::new(RecordingPlayer::default())
	});

	assert!(mounted);
	assert_eq!(0, factory_calls.get(), "Must not mount a second secondary player");
}

#[tokio::test]
async fn should_hand_secondary_audio_source_to_the_factory() {
	let transport = FakeTransport::with_video(record_with_audio(VIDEO_ID));
	let mut page = page(FormFactor::Desktop);
	page.load(&transport).await;
	let mut source = None;

	page.mount_secondary_player(|props| {
		source = Some(props.source.clone());
		Box::new(RecordingPlayer::default())
	});

	assert_eq!(Some("https://cdn.example/a1.mp3".to_string()), source);
}

#[tokio::test]
async fn should_not_seek_secondary_within_tolerance() {
	let (mut page, player) = synchronized_page(FormFactor::Desktop).await;

	page.on_secondary_progress(9.0);
	page.on_primary_progress(10.0);

	assert!(player.seeks().is_empty());
}

#[tokio::test]
async fn should_seek_secondary_to_primary_beyond_tolerance() {
	let (mut page, player) = synchronized_page(FormFactor::Desktop).await;

	page.on_secondary_progress(5.0);
	page.on_primary_progress(10.0);

	assert_eq!(vec![10.0], player.seeks());
}

#[tokio::test]
async fn should_mirror_play_and_pause_to_both_players() {
	let (mut page, _) = synchronized_page(FormFactor::Desktop).await;

	page.on_primary_play();
	let WatchView::Ready(playing) = page.view(&site()) else {
		panic!("Page not ready");
	};
	page.on_secondary_pause();
	let WatchView::Ready(paused) = page.view(&site()) else {
		panic!("Page not ready");
	};

	assert!(playing.primary_player.playing);
	assert!(playing.secondary_player.expect("Missing secondary player").playing);
	assert!(!paused.primary_player.playing);
	assert!(!paused.secondary_player.expect("Missing secondary player").playing);
}

#[tokio::test]
async fn should_toggle_playing_when_clicking_the_overlay() {
	let mut page = page(FormFactor::Desktop);

	page.toggle_playing();
	assert!(page.playback().is_playing);

	page.on_primary_pause();
	assert!(!page.playback().is_playing);
}

#[tokio::test]
async fn should_stop_playing_when_navigating_on_touch_devices() {
	let (mut page, _) = synchronized_page(FormFactor::Touch).await;
	page.on_primary_play();

	page.navigate(VideoId::from(OTHER_VIDEO_ID));

	assert!(!page.playback().is_playing);
	assert_eq!(&VideoId::from(OTHER_VIDEO_ID), page.video_id());
	assert_eq!(&FetchState::Loading, page.fetch_state());
	assert!(!page.has_secondary_player());
}

#[tokio::test]
async fn should_keep_playing_when_navigating_on_desktop() {
	let (mut page, _) = synchronized_page(FormFactor::Desktop).await;
	page.on_primary_play();
	page.on_secondary_progress(30.0);

	page.navigate(VideoId::from(OTHER_VIDEO_ID));

	assert!(page.playback().is_playing);
	assert_eq!(0.0, page.playback().secondary_position());
}

#[tokio::test]
async fn should_ignore_navigation_to_the_same_record() {
	let (mut page, _) = synchronized_page(FormFactor::Touch).await;
	page.on_primary_play();

	page.navigate(VideoId::from(VIDEO_ID));

	assert!(page.playback().is_playing);
	assert!(page.has_secondary_player());
	assert!(page.record().is_some());
}

#[tokio::test]
async fn should_delete_with_correct_credential_and_go_home() {
	let transport = FakeTransport::with_video(record(VIDEO_ID));
	let mut page = page(FormFactor::Desktop);
	let mut prompt = ScriptedPrompt::confirming();
	let mut router = RecordingRouter::default();
	page.set_credential_input("dracarys");

	let outcome = page.delete(&transport, &mut prompt, &mut router).await;

	assert_eq!(DeleteOutcome::Deleted(VideoId::from(VIDEO_ID)), outcome);
	assert_eq!(
		vec![(VideoId::from(VIDEO_ID), Credential::from("dracarys"))],
		*transport.deletions.lock()
	);
	assert_eq!(vec![DELETE_CONFIRMATION.to_string()], prompt.confirmations);
	assert_eq!(vec![Route::Home], router.routes);
	assert!(prompt.alerts.is_empty());
}

#[tokio::test]
async fn should_not_delete_with_wrong_credential() {
	let transport = FakeTransport::with_video(record(VIDEO_ID));
	let mut page = page(FormFactor::Desktop);
	let mut prompt = ScriptedPrompt::confirming();
	let mut router = RecordingRouter::default();
	page.set_credential_input("wrong");

	let outcome = page.delete(&transport, &mut prompt, &mut router).await;

	assert_eq!(DeleteOutcome::CredentialMismatch, outcome);
	assert!(transport.deletions.lock().is_empty());
	assert_eq!(vec!["Wrong password".to_string()], prompt.alerts);
	assert!(prompt.confirmations.is_empty());
	assert!(router.routes.is_empty());
}

#[tokio::test]
async fn should_not_delete_when_confirmation_is_declined() {
	let transport = FakeTransport::with_video(record(VIDEO_ID));
	let mut page = page(FormFactor::Desktop);
	let mut prompt = ScriptedPrompt::declining();
	let mut router = RecordingRouter::default();
	page.set_credential_input("dracarys");

	let outcome = page.delete(&transport, &mut prompt, &mut router).await;

	assert_eq!(DeleteOutcome::Declined, outcome);
	assert!(transport.deletions.lock().is_empty());
	assert!(router.routes.is_empty());
}

#[tokio::test]
async fn should_alert_delete_failure_and_stay() {
	let transport = FakeTransport::with_video(record(VIDEO_ID));
	transport.fail_with("Not allowed");
	let mut page = page(FormFactor::Desktop);
	let mut prompt = ScriptedPrompt::confirming();
	let mut router = RecordingRouter::default();
	page.set_credential_input("dracarys");

	let outcome = page.delete(&transport, &mut prompt, &mut router).await;

	assert_eq!(DeleteOutcome::Failed("GraphQL error: Not allowed".to_string()), outcome);
	assert_eq!(vec!["GraphQL error: Not allowed".to_string()], prompt.alerts);
	assert!(router.routes.is_empty());
}

#[tokio::test]
async fn should_redirect_to_edit_with_correct_credential() {
	let mut page = page(FormFactor::Desktop);
	let mut prompt = ScriptedPrompt::confirming();
	let mut router = RecordingRouter::default();
	page.set_credential_input("dracarys");

	let outcome = page.edit(&mut prompt, &mut router);

	assert_eq!(EditOutcome::Redirected, outcome);
	assert_eq!(
		vec![Route::Edit {
			id: VideoId::from(VIDEO_ID),
			credential: Credential::from("dracarys"),
		}],
		router.routes
	);
	assert!(prompt.confirmations.is_empty(), "Edit must not ask for confirmation");
}

#[tokio::test]
async fn should_not_redirect_to_edit_with_wrong_credential() {
	let mut page = page(FormFactor::Desktop);
	let mut prompt = ScriptedPrompt::confirming();
	let mut router = RecordingRouter::default();
	page.set_credential_input("wrong");

	let outcome = page.edit(&mut prompt, &mut router);

	assert_eq!(EditOutcome::CredentialMismatch, outcome);
	assert_eq!(vec!["Wrong password".to_string()], prompt.alerts);
	assert!(router.routes.is_empty());
}

use crate::configuration::Configuration;
use crate::context::ApplicationContext;
use crate::credential::{Credential, CredentialMismatch};
use crate::error::DanniError;
use crate::form_factor::FormFactor;
use crate::prompt::Prompt;
use crate::router::Router;
use crate::terminal::{LoggingPlayer, TerminalPrompt, TerminalRouter};
use crate::video::VideoId;
use crate::watch::{DeleteOutcome, EditOutcome, WatchPage};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
pub struct Commandline {
	#[clap(short = 'c', long = "config-file", default_value = "configuration.toml")]
	pub configuration_file_path: String,
	#[clap(subcommand)]
	pub command: BaseCommand,
}

#[derive(clap::Subcommand)]
pub enum BaseCommand {
	/// Show the watch page of a video
	Watch {
		id: String,
		/// Overrides the form factor from the configuration
		#[clap(long, value_enum)]
		form_factor: Option<FormFactor>,
	},
	/// Delete a video after confirmation
	Delete {
		id: String,
		#[clap(short, long)]
		password: String,
	},
	/// Print where the edit page of a video is
	Edit {
		id: String,
		#[clap(short, long)]
		password: String,
	},
	/// Print the configuration
	Configuration,
}

impl Commandline {
	pub async fn run(self) -> Result<(), DanniError> {
		let configuration = Configuration::from_file(&self.configuration_file_path)?;
		tracing_subscriber::fmt()
			.with_env_filter(EnvFilter::new(&configuration.log_filters))
			.try_init()
			.map_err(|error| DanniError::Logging(error.to_string()))?;

		let application_context = ApplicationContext::new(configuration)?;

		match self.command {
			BaseCommand::Watch { id, form_factor } => {
				let form_factor = form_factor.unwrap_or(application_context.configuration.form_factor);
				watch(&application_context, VideoId::from(id), form_factor).await;
			}
			BaseCommand::Delete { id, password } => {
				delete(
					&application_context,
					VideoId::from(id),
					Credential::from(password),
					&mut TerminalPrompt::stdio(),
					&mut TerminalRouter::default(),
				)
				.await?;
			}
			BaseCommand::Edit { id, password } => {
				edit(
					&application_context,
					VideoId::from(id),
					Credential::from(password),
					&mut TerminalPrompt::stdio(),
					&mut TerminalRouter::default(),
				)?;
			}
			BaseCommand::Configuration => println!("{:#?}", application_context.configuration),
		}
		Ok(())
	}
}

async fn watch(application_context: &ApplicationContext, video_id: VideoId, form_factor: FormFactor) {
	let mut page = WatchPage::new(video_id, form_factor, application_context.credential_gate());
	page.load(application_context.transport.as_ref()).await;
	if page.mount_secondary_player(|_| Box::new(LoggingPlayer)) {
		info!("Record has an alternate audio track, secondary player mounted.");
	}

	print!("{}", page.view(&application_context.configuration.site));
}

/// Declining the confirmation is not an error, everything else that didn't delete is.
async fn delete(
	application_context: &ApplicationContext,
	video_id: VideoId,
	credential: Credential,
	prompt: &mut dyn Prompt,
	router: &mut dyn Router,
) -> Result<(), DanniError> {
	let mut page = WatchPage::new(
		video_id,
		application_context.configuration.form_factor,
		application_context.credential_gate(),
	);
	page.set_credential_input(credential);

	match page.delete(application_context.transport.as_ref(), prompt, router).await {
		DeleteOutcome::Deleted(id) => {
			println!("Deleted video {id}.");
			Ok(())
		}
		DeleteOutcome::Declined => {
			info!("Deletion of video '{}' declined.", page.video_id());
			Ok(())
		}
		DeleteOutcome::CredentialMismatch => Err(CredentialMismatch.into()),
		DeleteOutcome::Failed(message) => Err(DanniError::Delete(message)),
	}
}

fn edit(
	application_context: &ApplicationContext,
	video_id: VideoId,
	credential: Credential,
	prompt: &mut dyn Prompt,
	router: &mut dyn Router,
) -> Result<(), DanniError> {
	let mut page = WatchPage::new(
		video_id,
		application_context.configuration.form_factor,
		application_context.credential_gate(),
	);
	page.set_credential_input(credential);

	match page.edit(prompt, router) {
		EditOutcome::Redirected => Ok(()),
		EditOutcome::CredentialMismatch => Err(CredentialMismatch.into()),
	}
}

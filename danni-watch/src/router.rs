use crate::credential::Credential;
use crate::video::VideoId;
use url::form_urlencoded;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
	Home,
	Edit { id: VideoId, credential: Credential },
}

impl Route {
	pub fn path(&self) -> String {
		match self {
			Route::Home => "/".to_string(),
			Route::Edit { id, credential } => {
				let query = form_urlencoded::Serializer::new(String::new())
					.append_pair("id", id.as_str())
					.append_pair("password", credential.as_str())
					.finish();
				format!("/edit?{query}")
			}
		}
	}
}

/// Client side navigation.
pub trait Router {
	fn push(&mut self, route: Route);
}

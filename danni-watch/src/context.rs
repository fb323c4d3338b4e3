use crate::configuration::Configuration;
use crate::credential::CredentialGate;
use crate::transport::VideoTransport;
use crate::transport::error::TransportError;
use crate::transport::graphql::GraphQlTransport;
use std::sync::Arc;

#[derive(Clone)]
pub struct ApplicationContext {
	pub configuration: Configuration,
	pub transport: Arc<dyn VideoTransport>,
}

impl ApplicationContext {
	pub fn new(configuration: Configuration) -> Result<ApplicationContext, TransportError> {
		let transport = Arc::new(GraphQlTransport::new(
			configuration.graphql_endpoint.clone(),
			configuration.request_timeout,
		)?);

		Ok(Self {
			configuration,
			transport,
		})
	}

	pub fn credential_gate(&self) -> CredentialGate {
		CredentialGate::new(self.configuration.edit_credential.clone())
	}
}

use std::path::Path;

use error_stack::ResultExt;
use google_sheets4::oauth2::{self, authenticator::Authenticator};
use google_sheets4::{hyper, hyper_rustls};

use crate::renderer::RenderError;

pub async fn auth(
    credentials_file: &Path,
    client: hyper::Client<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>,
) -> error_stack::Result<
    Authenticator<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>,
    RenderError,
> {
    let secret: oauth2::ServiceAccountKey = oauth2::read_service_account_key(credentials_file)
        .await
        .change_context(RenderError::Credentials)
        .attach_printable_lazy(|| {
            format!(
                "Could not read service account key: {}",
                credentials_file.display()
            )
        })?;

    oauth2::ServiceAccountAuthenticator::with_client(secret, client)
        .build()
        .await
        .change_context(RenderError::Credentials)
}

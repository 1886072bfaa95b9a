//! Bearer-token extractor for authenticated handlers.
//!
//! Handlers take [`AuthenticatedUser`] as an argument; requests without a
//! valid token fail with `401` before the handler body runs.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, UserId};
use crate::inbound::http::state::HttpState;

const BEARER_PREFIX: &str = "Bearer ";

/// The user resolved from the request's bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub UserId);

impl AuthenticatedUser {
    /// The authenticated user's identifier.
    pub fn user_id(self) -> UserId {
        self.0
    }
}

fn bearer_token(req: &HttpRequest) -> Result<String, Error> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| Error::unauthorized("missing bearer token"))?;
    let value = header
        .to_str()
        .map_err(|_| Error::unauthorized("invalid authorization header"))?;
    let token = value
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| Error::unauthorized("missing bearer token"))?;
    Ok(token.to_owned())
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = bearer_token(req);
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        Box::pin(async move {
            let token = token?;
            let state =
                state.ok_or_else(|| Error::internal("HTTP state is not configured"))?;
            let user_id = state.authenticator.authenticate(&token).await?;
            Ok(AuthenticatedUser(user_id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{FIXTURE_TOKEN, FIXTURE_USER_ID};
    use crate::inbound::http::state::HttpStatePorts;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test};
    use rstest::rstest;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id().to_string())
    }

    #[actix_web::test]
    async fn valid_bearer_token_resolves_user() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::new(HttpStatePorts::default())))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((AUTHORIZATION, format!("Bearer {FIXTURE_TOKEN}")))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        assert_eq!(body, FIXTURE_USER_ID.to_string().as_bytes());
    }

    #[rstest]
    #[case(None)]
    #[case(Some("Bearer"))]
    #[case(Some("Bearer "))]
    #[case(Some("Basic Zm9vOmJhcg=="))]
    #[case(Some("Bearer wrong-token"))]
    #[actix_web::test]
    async fn missing_or_invalid_tokens_are_unauthorised(#[case] header: Option<&str>) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::new(HttpStatePorts::default())))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let mut req = test::TestRequest::get().uri("/whoami");
        if let Some(value) = header {
            req = req.insert_header((AUTHORIZATION, value));
        }
        let res = test::call_service(&app, req.to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}

use async_trait::async_trait;
use axum::extract::{FromRequest, RequestParts};
use oso::PolarClass;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{invalid_input_error, Error};

pub const USER_ID_HEADER: &str = "x-user-id";

/// The session a request runs under. Anonymous sessions carry the nil id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
}

impl User {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }

    pub fn anonymous() -> Self {
        Self { id: Uuid::nil() }
    }

    pub fn is_anonymous(&self) -> bool {
        self.id.is_nil()
    }

    /// The id recorded as owner of routes this user creates.
    pub fn owner_id(&self) -> Option<Uuid> {
        match self.is_anonymous() {
            true => None,
            false => Some(self.id),
        }
    }
}

impl PolarClass for User {
    fn get_polar_class_builder() -> oso::ClassBuilder<User> {
        oso::Class::builder()
            .name("User")
            .add_attribute_getter("id", |recv: &User| recv.id.clone())
    }

    fn get_polar_class() -> oso::Class {
        let builder = User::get_polar_class_builder();
        builder.build()
    }
}

#[async_trait]
impl<B: Send> FromRequest<B> for User {
    type Rejection = Error;

    async fn from_request(req: &mut RequestParts<B>) -> Result<Self, Self::Rejection> {
        let header = match req.headers().get(USER_ID_HEADER) {
            Some(header) => header,
            None => return Ok(User::anonymous()),
        };

        let id = header
            .to_str()
            .ok()
            .and_then(|value| Uuid::parse_str(value.trim()).ok())
            .ok_or_else(|| invalid_input_error())?;

        Ok(User::new(id))
    }
}

#[test]
fn owner_id_test() {
    assert_eq!(User::anonymous().owner_id(), None);

    let id = Uuid::new_v4();
    assert_eq!(User::new(id).owner_id(), Some(id));
}

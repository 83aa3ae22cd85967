mod distance_api;
mod route_api;

use oso::Oso;

use crate::{
    api::API,
    auth::authorizor,
    db::RouteStore,
    error::{unauthorized_error, Error},
};

pub struct Engine {
    store: Box<dyn RouteStore>,
    authorizor: Oso,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new<S: RouteStore + 'static>(store: S) -> Result<Self, Error> {
        Ok(Self {
            store: Box::new(store),
            authorizor: authorizor::new()?,
        })
    }
}

impl Engine {
    pub fn is_allowed<Actor, Action, Resource>(
        &self,
        actor: Actor,
        action: Action,
        resource: Resource,
    ) -> Result<bool, Error>
    where
        Actor: oso::ToPolar,
        Action: oso::ToPolar,
        Resource: oso::ToPolar,
    {
        Ok(self.authorizor.is_allowed(actor, action, resource)?)
    }

    pub fn authorize<Actor, Action, Resource>(
        &self,
        actor: Actor,
        action: Action,
        resource: Resource,
    ) -> Result<(), Error>
    where
        Actor: oso::ToPolar,
        Action: oso::ToPolar,
        Resource: oso::ToPolar,
    {
        if self.is_allowed(actor, action, resource)? {
            return Ok(());
        }

        Err(unauthorized_error())
    }
}

impl API for Engine {}

use oso::{Oso, PolarClass};

use crate::auth::User;
use crate::entities::Route;
use crate::error::Error;

pub fn new() -> Result<Oso, Error> {
    let mut o = Oso::new();

    o.register_class(User::get_polar_class())?;
    o.register_class(Route::get_polar_class())?;

    o.load_str(include_str!("rules.polar"))?;

    Ok(o)
}

#[test]
fn anyone_creates_routes_test() {
    use uuid::Uuid;

    let authorizor = new().unwrap();

    let route = Route::new("Morning Commute".into(), 10.0, None);

    let result = authorizor.is_allowed(User::anonymous(), "create", route.clone());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(User::new(Uuid::new_v4()), "create", route.clone());
    assert_eq!(result.unwrap(), true);
}

#[test]
fn public_route_read_test() {
    use uuid::Uuid;

    let authorizor = new().unwrap();

    let route = Route::new("Morning Commute".into(), 10.0, None);

    let result = authorizor.is_allowed(User::anonymous(), "read", route.clone());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(User::new(Uuid::new_v4()), "read", route.clone());
    assert_eq!(result.unwrap(), true);
}

#[test]
fn owned_route_read_test() {
    use uuid::Uuid;

    let authorizor = new().unwrap();

    let owner = User::new(Uuid::new_v4());
    let stranger = User::new(Uuid::new_v4());
    let route = Route::new("Evening Run".into(), 5.0, owner.owner_id());

    let result = authorizor.is_allowed(owner.clone(), "read", route.clone());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(stranger.clone(), "read", route.clone());
    assert_eq!(result.unwrap(), false);

    let result = authorizor.is_allowed(User::anonymous(), "read", route.clone());
    assert_eq!(result.unwrap(), false);
}

#[test]
fn unknown_action_test() {
    let authorizor = new().unwrap();

    let route = Route::new("Morning Commute".into(), 10.0, None);

    let result = authorizor.is_allowed(User::anonymous(), "delete", route);
    assert_eq!(result.unwrap(), false);
}

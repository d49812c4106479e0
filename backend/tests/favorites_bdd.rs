//! Behavioural tests for favourite links and the combined view.

#[expect(
    dead_code,
    reason = "Shared harness fields are asserted by other integration suites."
)]
#[path = "support/app.rs"]
mod app;

use std::cell::RefCell;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use app::{Reply, call, create, memory_state};
use holocron::inbound::http::state::HttpState;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};

struct Seeded {
    user: i64,
    planet: i64,
    person: i64,
}

struct FavoritesWorld {
    state: RefCell<HttpState>,
    seeded: RefCell<Option<Seeded>>,
    last_reply: RefCell<Option<Reply>>,
}

impl FavoritesWorld {
    fn run<R>(&self, fut: impl std::future::Future<Output = R>) -> R {
        actix_rt::System::new().block_on(fut)
    }

    fn send(&self, request: TestRequest) -> Reply {
        let state = self.state.borrow().clone();
        self.run(async move { call(&state, request).await })
    }

    fn ids(&self) -> (i64, i64, i64) {
        let seeded = self.seeded.borrow();
        let seeded = seeded.as_ref().expect("records seeded");
        (seeded.user, seeded.planet, seeded.person)
    }

    fn favourites(&self) -> Value {
        let (user, _, _) = self.ids();
        let reply = self.send(TestRequest::get().uri(&format!("/user/{user}/favorites")));
        assert_eq!(reply.status, StatusCode::OK);
        reply.body["inf"].clone()
    }
}

#[fixture]
fn world() -> FavoritesWorld {
    FavoritesWorld {
        state: RefCell::new(memory_state()),
        seeded: RefCell::new(None),
        last_reply: RefCell::new(None),
    }
}

#[given("a fresh holocron service")]
fn a_fresh_holocron_service(world: &FavoritesWorld) {
    world.state.replace(memory_state());
}

#[given("a user, a planet and a person exist")]
fn a_user_a_planet_and_a_person_exist(world: &FavoritesWorld) {
    let state = world.state.borrow().clone();
    let seeded = world.run(async move {
        Seeded {
            user: create(
                &state,
                "/user",
                json!({ "name": "Han", "email": "han@corellia.example", "password": "kessel" }),
            )
            .await,
            planet: create(&state, "/planets", json!({ "name": "Corellia" })).await,
            person: create(&state, "/people", json!({ "name": "Chewbacca" })).await,
        }
    });
    world.seeded.replace(Some(seeded));
}

#[when("the user favourites the person")]
fn the_user_favourites_the_person(world: &FavoritesWorld) {
    let (user, _, person) = world.ids();
    let reply = world.send(
        TestRequest::post()
            .uri(&format!("/favorites_people/{user}"))
            .set_json(json!({ "people_id": person, "user_id": user })),
    );
    assert_eq!(reply.status, StatusCode::OK);
    world.last_reply.replace(Some(reply));
}

#[when("the user favourites the planet")]
fn the_user_favourites_the_planet(world: &FavoritesWorld) {
    let (user, planet, _) = world.ids();
    let reply = world.send(
        TestRequest::post()
            .uri(&format!("/favorites_planets/{user}"))
            .set_json(json!({ "planet_id": planet })),
    );
    assert_eq!(reply.status, StatusCode::OK);
    world.last_reply.replace(Some(reply));
}

#[when("the person is deleted")]
fn the_person_is_deleted(world: &FavoritesWorld) {
    let (_, _, person) = world.ids();
    let reply = world.send(TestRequest::delete().uri(&format!("/people/{person}")));
    assert_eq!(reply.status, StatusCode::OK);
    world.last_reply.replace(Some(reply));
}

#[when("the user favourites the person naming another user in the body")]
fn the_user_favourites_the_person_naming_another_user(world: &FavoritesWorld) {
    let (user, _, person) = world.ids();
    let reply = world.send(
        TestRequest::post()
            .uri(&format!("/favorites_people/{user}"))
            .set_json(json!({ "people_id": person, "user_id": user + 1 })),
    );
    world.last_reply.replace(Some(reply));
}

#[when("the user favourites a planet that does not exist")]
fn the_user_favourites_a_planet_that_does_not_exist(world: &FavoritesWorld) {
    let (user, planet, _) = world.ids();
    let reply = world.send(
        TestRequest::post()
            .uri(&format!("/favorites_planets/{user}"))
            .set_json(json!({ "planet_id": planet + 100 })),
    );
    world.last_reply.replace(Some(reply));
}

#[then("the favourites view lists the planet link then the person link")]
fn the_view_lists_planets_then_people(world: &FavoritesWorld) {
    let (user, planet, person) = world.ids();
    assert_eq!(
        world.favourites(),
        json!([
            { "id": 1, "planet_id": planet, "user_id": user },
            { "id": 1, "people_id": person, "user_id": user },
        ])
    );
}

#[then("the favourites view is empty")]
fn the_favourites_view_is_empty(world: &FavoritesWorld) {
    assert_eq!(world.favourites(), json!([]));
}

#[then("the response is a bad request")]
fn the_response_is_a_bad_request(world: &FavoritesWorld) {
    let reply = world.last_reply.borrow();
    let reply = reply.as_ref().expect("a request was sent");
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["code"], "invalid_request");
}

#[scenario(path = "tests/features/favorites.feature", index = 0)]
fn view_orders_planets_first(world: FavoritesWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/favorites.feature", index = 1)]
fn person_deletion_cascades(world: FavoritesWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/favorites.feature", index = 2)]
fn mismatched_user_is_rejected(world: FavoritesWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/favorites.feature", index = 3)]
fn dangling_planet_is_rejected(world: FavoritesWorld) {
    let _ = world;
}

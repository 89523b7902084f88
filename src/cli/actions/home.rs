use crate::{
    cli::actions::SessionArgs,
    features::auth::save_user,
    store::{Dispatch, Route, Store},
    views::{AdminMenu, LandingPage},
};

#[derive(Debug)]
pub struct Args {
    pub session: Option<SessionArgs>,
}

/// Handle the home action: shows the landing page, or where it redirects a
/// logged-in user, followed by the alert menu.
pub fn execute(args: Args) {
    let store = Store::new();
    if let Some(session) = args.session {
        store.dispatch(save_user(session.into()));
    }

    let page = store.read(LandingPage::connect);
    page.mount(&store);

    let state = store.snapshot();
    match state.router.location() {
        Route::Landing => println!("{}", page.render()),
        location => println!("Redirected to {location}"),
    }
    print!("{}", AdminMenu::render(state.auth.is_logged_in()));
}

use portal_router::{
    HistoryMode, Route, View, application_router, create_web_hash_history, create_web_history,
    history::ParseHistoryModeError,
};

// --- History Strategies ---

#[test]
fn test_base_is_normalised() {
    assert_eq!(create_web_history("").base(), "/");
    assert_eq!(create_web_history("/").base(), "/");
    assert_eq!(create_web_history("app").base(), "/app/");
    assert_eq!(create_web_history("/app").base(), "/app/");
    assert_eq!(create_web_hash_history("/app/").base(), "/app/");
}

#[test]
fn test_web_history_route_path() {
    let history = create_web_history("/app/");

    assert_eq!(history.route_path("/app"), Some("/"));
    assert_eq!(history.route_path("/app/"), Some("/"));
    assert_eq!(history.route_path("/app/home?x=1#y"), Some("/home"));
    assert_eq!(history.route_path("/apple"), None);
    assert_eq!(history.route_path("/home"), None);
}

#[test]
fn test_hash_history_route_path() {
    let history = create_web_hash_history("/");

    assert_eq!(history.route_path("/"), Some("/"));
    assert_eq!(history.route_path("/#"), Some("/"));
    assert_eq!(history.route_path("/#/crud"), Some("/crud"));
    assert_eq!(history.route_path("/?lang=en#/home?tab=2"), Some("/home"));
    assert_eq!(history.route_path("/#home"), None);
    assert_eq!(history.route_path("/crud"), None);
}

#[test]
fn test_hrefs() {
    assert_eq!(create_web_history("/").href("/"), "/");
    assert_eq!(create_web_history("/").href("/home"), "/home");
    assert_eq!(create_web_history("/app").href("/"), "/app/");
    assert_eq!(create_web_history("/app").href("/crud"), "/app/crud");
    assert_eq!(create_web_hash_history("/").href("/home"), "/#/home");
    assert_eq!(create_web_hash_history("/app").href("/"), "/app/#/");
}

#[test]
fn test_history_mode_parsing() {
    assert_eq!("web".parse::<HistoryMode>(), Ok(HistoryMode::Web));
    assert_eq!(" Hash ".parse::<HistoryMode>(), Ok(HistoryMode::Hash));
    assert_eq!("history".parse::<HistoryMode>(), Ok(HistoryMode::Web));
    assert_eq!(
        "memory".parse::<HistoryMode>(),
        Err(ParseHistoryModeError("memory".to_string()))
    );
}

// --- Router Configuration ---

#[test]
fn test_navigation_scenario_web_history() {
    let router = application_router(create_web_history("/"));

    assert_eq!(router.resolve("/").map(Route::view), Some(View::Login));
    assert_eq!(router.resolve("/home").map(Route::view), Some(View::Home));
    assert_eq!(router.resolve("/crud").map(Route::view), Some(View::Crud));
    assert!(router.resolve("/missing").is_none());
}

#[test]
fn test_navigation_scenario_hash_history() {
    let router = application_router(create_web_hash_history("/"));

    assert_eq!(router.resolve("/").map(Route::view), Some(View::Login));
    assert_eq!(router.resolve("/#/home").map(Route::view), Some(View::Home));
    assert_eq!(router.resolve("/#/crud").map(Route::view), Some(View::Crud));
    assert!(router.resolve("/crud").is_none());
}

#[test]
fn test_web_history_with_base() {
    let router = application_router(create_web_history("/app/"));

    assert_eq!(router.resolve("/app/home").map(Route::view), Some(View::Home));
    assert_eq!(router.href("Crud").as_deref(), Some("/app/crud"));
    assert_eq!(router.server_paths(), vec!["/app/", "/app/home", "/app/crud"]);
}

#[test]
fn test_server_paths_per_mode() {
    let web = application_router(create_web_history("/"));
    let hash = application_router(create_web_hash_history("/"));

    assert_eq!(web.server_paths(), vec!["/", "/home", "/crud"]);
    assert_eq!(hash.server_paths(), vec!["/"]);
}

#[test]
fn test_href_unknown_name() {
    let router = application_router(create_web_history("/"));
    assert!(router.href("Settings").is_none());
}

#[test]
fn test_manifest_shape() {
    let manifest = application_router(create_web_hash_history("/")).manifest();

    assert_eq!(manifest.history, HistoryMode::Hash);
    assert_eq!(manifest.base, "/");
    let hrefs: Vec<_> = manifest.routes.iter().map(|r| r.href.as_str()).collect();
    assert_eq!(hrefs, vec!["/#/", "/#/home", "/#/crud"]);
    assert_eq!(manifest.routes[2].component, "CrudPage");

    let json = serde_json::to_value(&manifest).unwrap();
    assert_eq!(json["history"], "hash");
    assert_eq!(json["routes"][1]["view"], "Home");
}

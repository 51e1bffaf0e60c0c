use super::*;

fn project() -> Project {
    Project {
        slug: None,
        title: "Weather App".into(),
        description: "Forecasts.".into(),
        tags: vec!["React".into()],
        image: "/assets/weather.png".into(),
        demo_url: None,
        repo_url: None,
    }
}

#[test]
fn private_project_has_no_actions() {
    assert!(project_actions(&project()).is_empty());
}

#[test]
fn actions_follow_demo_repo_detail_order() {
    let p = Project {
        slug: Some("weather-app".into()),
        demo_url: Some("https://weather.example".into()),
        repo_url: Some("https://github.com/Tosin-O/WeatherApp".into()),
        ..project()
    };
    let actions = project_actions(&p);
    let hrefs: Vec<_> = actions.iter().map(|a| a.href.as_str()).collect();
    assert_eq!(
        hrefs,
        vec!["https://weather.example", "https://github.com/Tosin-O/WeatherApp", "/projects/weather-app"]
    );
    assert!(actions[0].label.starts_with("Live Demo"));
}

#[test]
fn repo_only_project_gets_one_button() {
    let p = Project { repo_url: Some("https://github.com/Tosin-O/Spring".into()), ..project() };
    let actions = project_actions(&p);
    assert_eq!(actions.len(), 1);
    assert!(actions[0].label.starts_with("GitHub"));
}

#[test]
fn cards_cascade_one_fifty_ms_apart() {
    assert_eq!(project_delay(0), 0);
    assert_eq!(project_delay(3), 450);
}

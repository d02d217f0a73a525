//! OpenWeather provider and search pipeline against a mock HTTP server.

use std::time::Duration;

use weather_core::{
    Category, ForecastError, ForecastProvider, SearchResult,
    provider::openweather::OpenWeatherProvider, search,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Five days of 3-hour entries from 2024-06-10 00:00 UTC; noon is 20 + day.
fn forecast_body() -> serde_json::Value {
    let start = 1_717_977_600_i64; // 2024-06-10 00:00:00 UTC
    let list: Vec<_> = (0..40)
        .map(|i| {
            let dt = start + i * 3 * 3600;
            let day = i / 8;
            let hour = (i % 8) * 3;
            let noon = hour == 12;
            serde_json::json!({
                "dt": dt,
                "dt_txt": format!("2024-06-{:02} {:02}:00:00", 10 + day, hour),
                "main": {
                    "temp": if noon { 20.0 + day as f64 } else { 10.0 },
                    "humidity": 40 + day,
                    "pressure": 1009,
                    "temp_min": 9.0,
                    "temp_max": 21.0
                },
                "weather": [{
                    "id": if noon { 500 } else { 800 },
                    "main": if noon { "Rain" } else { "Clear" },
                    "description": if noon { "light rain" } else { "clear sky" },
                    "icon": if noon { "10d" } else { "01n" }
                }],
                "wind": { "speed": 5.2, "deg": 180 },
                "clouds": { "all": 20 }
            })
        })
        .collect();

    serde_json::json!({
        "cod": "200",
        "cnt": 40,
        "list": list,
        "city": {
            "name": "London",
            "country": "GB",
            "coord": { "lat": 51.5085, "lon": -0.1257 }
        }
    })
}

fn client(server: &MockServer) -> OpenWeatherProvider {
    #[allow(clippy::expect_used)]
    OpenWeatherProvider::new("TEST_KEY".into(), server.uri(), Duration::from_secs(5))
        .expect("Failed to create client")
}

async fn mount_forecast(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn mount_uv(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/uvi"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn forecast_is_aggregated_into_five_noon_days() {
    let server = MockServer::start().await;
    mount_forecast(&server, ResponseTemplate::new(200).set_body_json(forecast_body())).await;
    mount_uv(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "lat": 51.51,
            "lon": -0.13,
            "date_iso": "2024-06-10T12:00:00Z",
            "date": 1718020800,
            "value": 6.4
        })),
    )
    .await;

    let provider = client(&server);
    let SearchResult::Found(dashboard) = search(&provider, "London").await else {
        panic!("expected a dashboard");
    };

    assert_eq!(dashboard.city.display_name(), "London, GB");
    assert_eq!(dashboard.daily.len(), 5);
    for (i, day) in dashboard.daily.iter().enumerate() {
        assert_eq!(day.date_key(), format!("2024-06-{:02}", 10 + i));
        assert_eq!(day.temperature_c, 20.0 + i as f64);
        assert_eq!(day.condition.description, "light rain");
    }
    assert_eq!(dashboard.category, Category::Rain);
    assert_eq!(dashboard.recommendation.title, "Mild & Rainy Outfit");
    assert_eq!(dashboard.metrics.wind_speed_mps, 5.2);
    assert_eq!(dashboard.hourly_chart.len(), 8);
    assert_eq!(dashboard.uv.map(|uv| uv.risk.as_str()), Some("High"));
}

#[tokio::test]
async fn city_query_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&server)
        .await;

    let forecast = client(&server).fetch_forecast("New York").await.unwrap();
    assert_eq!(forecast.samples.len(), 40);
}

#[tokio::test]
async fn not_found_status_maps_to_not_found() {
    let server = MockServer::start().await;
    mount_forecast(
        &server,
        ResponseTemplate::new(404)
            .set_body_json(serde_json::json!({ "cod": "404", "message": "city not found" })),
    )
    .await;

    let err = client(&server).fetch_forecast("Atlantis").await.unwrap_err();
    assert!(matches!(err, ForecastError::NotFound { ref city } if city == "Atlantis"));

    match search(&client(&server), "Atlantis").await {
        SearchResult::Failed { message } => {
            assert_eq!(message, "City not found. Please try a different search term.");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn server_error_is_transport_failure() {
    let server = MockServer::start().await;
    mount_forecast(&server, ResponseTemplate::new(500).set_body_string("upstream down")).await;

    let err = client(&server).fetch_forecast("London").await.unwrap_err();
    match err {
        ForecastError::Transport(msg) => {
            assert!(msg.contains("500"));
            assert!(msg.contains("upstream down"));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_is_transport_failure() {
    let server = MockServer::start().await;
    mount_forecast(
        &server,
        ResponseTemplate::new(401)
            .set_body_json(serde_json::json!({ "cod": 401, "message": "Invalid API key" })),
    )
    .await;

    let err = client(&server).fetch_forecast("London").await.unwrap_err();
    assert!(matches!(err, ForecastError::Transport(_)));
}

#[tokio::test]
async fn garbage_body_is_malformed() {
    let server = MockServer::start().await;
    mount_forecast(&server, ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let err = client(&server).fetch_forecast("London").await.unwrap_err();
    assert!(matches!(err, ForecastError::MalformedData(_)));
}

#[tokio::test]
async fn malformed_entries_are_skipped() {
    let mut body = forecast_body();
    let list = body["list"].as_array_mut().unwrap();
    list[0]["weather"] = serde_json::json!([]);
    list[1].as_object_mut().unwrap().remove("dt");
    list[2]["weather"][0].as_object_mut().unwrap().remove("icon");
    list[3]["weather"] = serde_json::Value::Null;

    let server = MockServer::start().await;
    mount_forecast(&server, ResponseTemplate::new(200).set_body_json(body)).await;

    let forecast = client(&server).fetch_forecast("London").await.unwrap();
    assert_eq!(forecast.samples.len(), 36);
    assert_eq!(forecast.samples[0].local_time.to_string(), "2024-06-10 12:00:00");
}

#[tokio::test]
async fn uv_failure_still_yields_dashboard() {
    let server = MockServer::start().await;
    mount_forecast(&server, ResponseTemplate::new(200).set_body_json(forecast_body())).await;
    mount_uv(&server, ResponseTemplate::new(503)).await;

    match search(&client(&server), "London").await {
        SearchResult::Found(dashboard) => assert!(dashboard.uv.is_none()),
        other => panic!("unexpected {other:?}"),
    }
}

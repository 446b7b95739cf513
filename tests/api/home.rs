use crate::helpers::spawn_app;

#[tokio::test]
async fn home_page_serves_the_reservation_form() {
    // arrange
    let test_app = spawn_app().await;

    // act
    let response = test_app.get_home().await;

    // assert
    assert!(response.status().is_success());
    assert!(response
        .headers()
        .get("Content-Type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let body = response.text().await.unwrap();
    // the five fields, posted to the reservation endpoint
    assert!(body.contains(r#"action="/reservations""#));
    for field in ["firstName", "lastName", "email", "phone", "message"] {
        assert!(
            body.contains(&format!(r#"name="{}""#, field)),
            "home page is missing the {} field",
            field
        );
    }
    // bilingual labels and the alternate escape hatch
    assert!(body.contains("RESERVE TICKETS / RESERVAR BOLETOS"));
    assert!(body.contains("* Required fields / Campos obligatorios"));
    assert!(body.contains(r#"formaction="/reservations/alternate""#));
}

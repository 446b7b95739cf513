use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

/// Serves the single promotional page with the bilingual reservation form.
///
/// The alternate submit button reuses the same form fields but posts to the
/// fire-and-forget endpoint, for visitors whose first attempt did not go through.
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Francisco Herrera in Concert | La Música Une</title>
</head>
<body>
    <header>
        <h1>La Música Une</h1>
        <h2>Francisco Herrera in Concert</h2>
        <p>Migration strengthens the nation &mdash; join us for an unforgettable
            celebration of music and cultural heritage.</p>
    </header>
    <section>
        <h3>Reserve Tickets / Reservar Boletos</h3>
        <form id="reservation-form" action="/reservations" method="post">
            <label>First Name / Nombre *
                <input type="text" name="firstName" placeholder="Nombre" required>
            </label>
            <label>Last Name / Apellido *
                <input type="text" name="lastName" placeholder="Apellido" required>
            </label>
            <label>Email / Correo *
                <input type="email" name="email" placeholder="Correo" required>
            </label>
            <label>Phone / Teléfono
                <input type="tel" name="phone" placeholder="Número">
            </label>
            <label>Message / Mensaje
                <textarea name="message" placeholder="Mensaje"></textarea>
            </label>
            <button type="submit">RESERVE TICKETS / RESERVAR BOLETOS</button>
            <button type="submit" formaction="/reservations/alternate">
                If submission doesn't work, click here to try the direct method
            </button>
            <p>* Required fields / Campos obligatorios</p>
        </form>
    </section>
</body>
</html>"#,
        )
}

// HTTP Server Task - REST-Interface für Kommandos
use defmt::info;
use embassy_net::Stack;
use embassy_time::Duration;
use picoserve::response::{IntoResponse, Json};
use picoserve::routing::{get, parse_path_segment};

use esp_core::translate;

use crate::PatternCell;
use crate::config::{COMMAND_MAX_LEN, HTTP_BUFFER_SIZE, TCP_RX_BUFFER_SIZE, TCP_TX_BUFFER_SIZE};
use crate::web::{INDEX_HTML, protocol::LedStatus};

/// HTTP Server Task - läuft parallel zu anderen Tasks
///
/// Stellt das REST-Kommando-Interface bereit:
/// - `GET /` serviert die Control-Page
/// - `GET /led` liefert den aktuellen Animations-Code als JSON
/// - `GET /led/<token>` übersetzt das Token und schreibt die
///   Zustands-Zelle; die Antwort nennt den resultierenden Code
///
/// Die Route schreibt NUR die Zelle - gerendert wird ausschließlich
/// im Animations-Task. Unbekannte Tokens fallen auf Code 0 zurück
/// (dokumentiertes Verhalten des Kommando-Interfaces).
///
/// **Task Pool:** Diese Task wird 4x gespawnt für concurrent connections.
///
/// # Parameter
/// - `task_id`: Eindeutige ID für diese Server-Instanz (0..3)
/// - `stack`: embassy-net Stack für Netzwerk-Zugriff
/// - `cell`: Zustands-Zelle (Kommando-Intake-Seite)
#[embassy_executor::task(pool_size = 4)]
pub async fn http_server_task(
    task_id: usize,
    stack: &'static Stack<'static>,
    cell: &'static PatternCell,
) {
    info!("HTTP: Server task {} starting on port 80...", task_id);

    // Router-Konfiguration
    let app = picoserve::Router::new()
        .route("/", get(serve_html))
        .route(
            "/led",
            get(move || async move {
                let snapshot = cell.read();
                Json(LedStatus {
                    result: 0,
                    code: snapshot.code.raw(),
                })
            }),
        )
        .route(
            ("/led", parse_path_segment::<heapless::String<COMMAND_MAX_LEN>>()),
            get(move |token: heapless::String<COMMAND_MAX_LEN>| async move {
                let code = translate(token.as_str());
                cell.write(code);
                info!("HTTP: command '{}' -> code {}", token.as_str(), code);
                Json(LedStatus {
                    result: 0,
                    code: code.raw(),
                })
            }),
        );

    // Server-Konfiguration
    let config = picoserve::Config::new(picoserve::Timeouts {
        start_read_request: Some(Duration::from_secs(5)),
        read_request: Some(Duration::from_secs(1)),
        write: Some(Duration::from_secs(1)),
        persistent_start_read_request: Some(Duration::from_secs(5)),
    })
    .keep_connection_alive();

    // HTTP-Buffer für Requests/Responses
    let mut http_buffer = [0u8; HTTP_BUFFER_SIZE];

    // TCP-Buffers für Socket
    let mut rx_buffer = [0u8; TCP_RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TCP_TX_BUFFER_SIZE];

    // Server erstellen
    let server = picoserve::Server::new(&app, &config, &mut http_buffer);

    // Server starten (lauscht auf Port 80)
    // task_id ermöglicht mehrere concurrent Server-Instanzen
    let _ = server
        .listen_and_serve(task_id, *stack, 80, &mut rx_buffer, &mut tx_buffer)
        .await;

    info!("HTTP: Server task {} ended", task_id);
}

/// Serviert die HTML-Control-Page
async fn serve_html() -> impl IntoResponse {
    picoserve::response::Response::new(picoserve::response::StatusCode::OK, INDEX_HTML)
        .with_header("Content-Type", "text/html; charset=utf-8")
}

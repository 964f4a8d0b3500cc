/*!
 * # Hôte TCP
 *
 * Expose une `MouseSession` par client : chaque message reçu (cadre
 * `network`, contenu JSON) est une commande, chaque commande reçoit
 * exactement une réponse `{"<Commande>Result": ...}` ou `{"Error": ...}`.
 */

use std::io::{self, Read, Write};
use std::net::TcpListener;

use log::{debug, info, warn};
use serde_json::{json, Value};
use thiserror::Error;

use crate::maze::error::MazeError;
use crate::maze::json_utils::{self, error_message, maze_data_json, result_message};
use crate::maze::network;
use crate::maze::session::MouseSession;

/// Requête que la session ne peut pas exécuter.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("malformed request: expected {{\"Command\": argument}}")]
    Malformed,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("bad argument for {command}: {argument}")]
    BadArgument { command: String, argument: Value },
    #[error(transparent)]
    Maze(#[from] MazeError),
}

fn bad_argument(command: &str, argument: &Value) -> RequestError {
    RequestError::BadArgument {
        command: command.to_string(),
        argument: argument.clone(),
    }
}

/// Exécute une commande sur la session et renvoie la valeur du résultat.
fn execute(
    session: &mut MouseSession,
    command: &str,
    argument: &Value,
) -> Result<Value, RequestError> {
    let value = match command {
        "InitializeMaze" => {
            session.initialize_maze();
            Value::Null
        }
        "GetPosition" => json!(session.position()),
        "SetPosition" => {
            // null ou un index négatif : souris retirée de la grille
            match argument {
                Value::Null => session.clear_position(),
                Value::Number(n) if n.as_i64().is_some_and(|v| v < 0) => session.clear_position(),
                Value::Number(n) => {
                    let index = n
                        .as_u64()
                        .and_then(|v| usize::try_from(v).ok())
                        .ok_or_else(|| bad_argument(command, argument))?;
                    session.set_position(index)?;
                }
                _ => return Err(bad_argument(command, argument)),
            }
            Value::Null
        }
        "GetHeading" => json!(session.heading()),
        "SetHeading" => {
            let heading = argument
                .as_u64()
                .and_then(|v| u8::try_from(v).ok())
                .ok_or_else(|| bad_argument(command, argument))?;
            session.set_heading(heading)?;
            Value::Null
        }
        "GetMazeData" => maze_data_json(&session.maze_data()),
        "TurnRight" => {
            session.turn_right();
            Value::Null
        }
        "TurnLeft" => {
            session.turn_left();
            Value::Null
        }
        "TurnAround" => {
            session.turn_around();
            Value::Null
        }
        "MoveForward" => json!(session.move_forward()),
        "IsAtCenter" => json!(session.is_at_center()),
        "Step" => {
            let reading = argument
                .as_f64()
                .ok_or_else(|| bad_argument(command, argument))?;
            json!(session.step(reading as f32))
        }
        other => return Err(RequestError::UnknownCommand(other.to_string())),
    };
    Ok(value)
}

/// Traite un message JSON et construit la réponse.
pub fn handle_request(session: &mut MouseSession, request: &Value) -> Value {
    let outcome = json_utils::extract_command(request)
        .ok_or(RequestError::Malformed)
        .and_then(|(command, argument)| {
            execute(session, command, argument).map(|value| result_message(command, value))
        });
    match outcome {
        Ok(response) => response,
        Err(e) => {
            warn!("Request {} rejected: {}", request, e);
            error_message(e)
        }
    }
}

/// Boucle d'un client : une session neuve, jusqu'à la fermeture du flux.
pub fn handle_client<S: Read + Write>(stream: &mut S) -> io::Result<()> {
    let mut session = MouseSession::new();
    loop {
        let msg = match network::receive_message(stream) {
            Ok(msg) => msg,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                debug!("Client closed the connection");
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        debug!("Received message: {}", msg);

        let response = match json_utils::parse_json(&msg) {
            Ok(request) => handle_request(&mut session, &request),
            Err(e) => error_message(format!("invalid JSON: {}", e)),
        };
        network::send_message(stream, &response.to_string())?;
    }
}

/// Traite les connexions l'une après l'autre et renvoie le nombre de
/// clients servis. Une connexion qui échoue à l'acceptation est ignorée.
pub fn serve_connections<S, I>(connections: I) -> usize
where
    S: Read + Write,
    I: IntoIterator<Item = io::Result<S>>,
{
    let mut served = 0;
    for stream in connections {
        let mut stream = match stream {
            Ok(stream) => stream,
            Err(e) => {
                warn!("Failed to accept a connection: {}", e);
                continue;
            }
        };
        if let Err(e) = handle_client(&mut stream) {
            warn!("Connection ended with an error: {}", e);
        }
        served += 1;
    }
    served
}

/// Accepte les connexions sur `address` jusqu'à l'arrêt du processus.
pub fn serve(address: &str) -> io::Result<()> {
    let listener = TcpListener::bind(address)?;
    info!("Server listening on {}", address);

    let connections = listener.incoming().inspect(|stream| {
        if let Ok(stream) = stream {
            match stream.peer_addr() {
                Ok(peer) => info!("New connection: {}", peer),
                Err(e) => warn!("New connection from an unknown peer: {}", e),
            }
        }
    });
    serve_connections(connections);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(session: &mut MouseSession, request: Value) -> Value {
        handle_request(session, &request)
    }

    #[test]
    fn drives_a_session_through_commands() {
        let mut session = MouseSession::new();
        assert_eq!(
            ask(&mut session, json!("GetPosition")),
            json!({ "GetPositionResult": null })
        );
        assert_eq!(
            ask(&mut session, json!({ "SetPosition": 0 })),
            json!({ "SetPositionResult": null })
        );
        assert_eq!(
            ask(&mut session, json!({ "Step": 20.0 })),
            json!({ "StepResult": false })
        );
        assert_eq!(
            ask(&mut session, json!("GetPosition")),
            json!({ "GetPositionResult": 4 })
        );
        ask(&mut session, json!("TurnRight"));
        assert_eq!(
            ask(&mut session, json!({ "MoveForward": null })),
            json!({ "MoveForwardResult": true })
        );
        assert_eq!(
            ask(&mut session, json!("IsAtCenter")),
            json!({ "IsAtCenterResult": true })
        );
        assert_eq!(
            ask(&mut session, json!("GetHeading")),
            json!({ "GetHeadingResult": 1 })
        );
        let data = ask(&mut session, json!("GetMazeData"));
        let cells = data["GetMazeDataResult"].as_array().unwrap();
        assert_eq!(cells.len(), 16);
        assert_eq!(cells[0]["visited"], json!(true));
        assert_eq!(cells[5]["distance"], json!(0));
    }

    #[test]
    fn negative_position_unsets() {
        let mut session = MouseSession::new();
        session.set_position(3).unwrap();
        ask(&mut session, json!({ "SetPosition": -1 }));
        assert_eq!(session.position(), None);
    }

    #[test]
    fn errors_are_reported_not_fatal() {
        let mut session = MouseSession::new();
        for request in [
            json!({ "SetPosition": 16 }),
            json!({ "SetHeading": 4 }),
            json!({ "SetHeading": "north" }),
            json!({ "Step": "far" }),
            json!({ "Fly": null }),
            json!([1, 2]),
        ] {
            let response = ask(&mut session, request);
            assert!(response.get("Error").is_some(), "{response}");
        }
        assert_eq!(session.position(), None);
        assert_eq!(session.heading(), 0);
    }

    /// Flux en mémoire : lit les requêtes, accumule les réponses.
    struct Duplex {
        input: Cursor<Vec<u8>>,
        output: Vec<u8>,
    }

    impl Read for Duplex {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.input.read(buf)
        }
    }

    impl Write for Duplex {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.output.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn framed_client_loop() {
        let mut input = Vec::new();
        network::send_message(&mut input, r#"{"SetPosition": 5}"#).unwrap();
        network::send_message(&mut input, "not json").unwrap();
        network::send_message(&mut input, r#"{"Step": 1.0}"#).unwrap();
        let mut stream = Duplex {
            input: Cursor::new(input),
            output: Vec::new(),
        };

        handle_client(&mut stream).unwrap();

        let mut replies = Cursor::new(stream.output);
        let mut next = || {
            let msg = network::receive_message(&mut replies).unwrap();
            json_utils::parse_json(&msg).unwrap()
        };
        assert_eq!(next(), json!({ "SetPositionResult": null }));
        assert!(next().get("Error").is_some());
        assert_eq!(next(), json!({ "StepResult": true }));
    }

    #[test]
    fn failed_accept_does_not_stop_the_server() {
        let mut input = Vec::new();
        network::send_message(&mut input, r#""GetPosition""#).unwrap();
        let connections = vec![
            Err(io::Error::new(io::ErrorKind::ConnectionAborted, "reset")),
            Ok(Duplex {
                input: Cursor::new(input.clone()),
                output: Vec::new(),
            }),
            Err(io::Error::other("too many open files")),
            Ok(Duplex {
                input: Cursor::new(input),
                output: Vec::new(),
            }),
        ];
        assert_eq!(serve_connections(connections), 2);
    }

    #[test]
    fn oversized_frame_ends_only_that_client() {
        let connections = vec![
            Ok(Duplex {
                input: Cursor::new(vec![0xff; 8]),
                output: Vec::new(),
            }),
            Ok(Duplex {
                input: Cursor::new(Vec::new()),
                output: Vec::new(),
            }),
        ];
        assert_eq!(serve_connections(connections), 2);
    }
}

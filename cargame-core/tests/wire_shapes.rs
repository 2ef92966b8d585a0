use cargame_core::{
    CarDto, CarMoveEventDto, CarMoveType, CarType, Direction, Envelope, GameDto, GameMapDto,
    GameStatus, RunningGameDto, format_date,
};

#[test]
fn car_list_envelope_decodes() {
    let body = r#"{
        "error": null,
        "data": [
            {
                "name": "red",
                "type": "RACER",
                "crashed": false,
                "inGame": true,
                "currentStatus": {
                    "x": 3,
                    "y": 4,
                    "direction": "EAST",
                    "revertingFromHistoryInProgress": false
                }
            },
            { "name": "tank", "type": "MONSTER_TRUCK" }
        ]
    }"#;
    let cars = serde_json::from_str::<Envelope<Vec<CarDto>>>(body)
        .unwrap()
        .into_items();
    assert_eq!(cars.len(), 2);
    assert_eq!(cars[0].car_type, CarType::Racer);
    assert!(cars[0].is_in_game());
    let status = cars[0].current_status.as_ref().unwrap();
    assert_eq!((status.x, status.y), (3, 4));
    assert_eq!(status.direction, Some(Direction::East));
    assert_eq!(cars[1].car_type, CarType::MonsterTruck);
    assert!(!cars[1].is_crashed());
    assert!(cars[1].current_status.is_none());
}

#[test]
fn game_details_decode_with_nested_map_and_movements() {
    let body = r#"{
        "data": {
            "id": 12,
            "name": "oval",
            "status": "RUNNING",
            "startedAt": "2019-05-02T10:11:12.345",
            "finishedAt": null,
            "map": {
                "id": 3,
                "name": "oval",
                "used": true,
                "size": 10,
                "walls": [{ "x": 1, "y": 2 }]
            },
            "cars": [{ "name": "red", "type": "RACER" }],
            "carMovements": [{
                "carId": 1,
                "carName": "red",
                "carType": "RACER",
                "gameId": 12,
                "gameName": "oval",
                "eventType": "TURN_LEFT",
                "eventTime": "2019-05-02T08:11:13.001Z"
            }]
        }
    }"#;
    let game = serde_json::from_str::<Envelope<GameDto>>(body)
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(game.id, Some(12));
    assert!(game.is_running());
    let map: &GameMapDto = game.map.as_ref().unwrap();
    assert!(map.used);
    assert_eq!(map.walls.len(), 1);
    let movement: &CarMoveEventDto = &game.car_movements.as_ref().unwrap()[0];
    assert_eq!(movement.event_type, Some(CarMoveType::TurnLeft));
    assert_eq!(
        format_date(game.started_at.as_deref()).as_deref(),
        Some("02.05.2019 10:11:12:345")
    );
    assert_eq!(format_date(game.finished_at.as_deref()), None);
}

#[test]
fn completed_and_unknown_statuses_decode() {
    let games: Vec<GameDto> = serde_json::from_str(
        r#"[{"name":"a","status":"COMPLETED"},{"name":"b","status":"PAUSED"},{"name":"c"}]"#,
    )
    .unwrap();
    assert_eq!(games[0].status, Some(GameStatus::Completed));
    assert_eq!(games[1].status, Some(GameStatus::Unknown));
    assert_eq!(games[2].status, None);
    assert!(!games[2].is_running());
}

#[test]
fn running_game_without_cars_is_empty() {
    let running = serde_json::from_str::<Envelope<RunningGameDto>>(r#"{"data":{}}"#)
        .unwrap()
        .into_data()
        .unwrap();
    assert!(running.cars.is_empty());
}

#[test]
fn error_envelope_exposes_backend_error() {
    let envelope = serde_json::from_str::<Envelope<CarDto>>(
        r#"{"error":{"code":"400 BAD_REQUEST","message":"name must not be empty"}}"#,
    )
    .unwrap();
    assert_eq!(
        envelope.error.as_ref().and_then(|e| e.message.as_deref()),
        Some("name must not be empty")
    );
    assert!(envelope.into_data().is_err());
}

#[test]
fn unexpected_heading_does_not_break_the_car_list() {
    let cars = serde_json::from_str::<Envelope<Vec<CarDto>>>(
        r#"{"data":[
            {"name":"red","type":"RACER","currentStatus":{"x":1,"y":1,"direction":"UP"}},
            {"name":"blue","type":"RACER","currentStatus":{"x":2,"y":2,"direction":"WEST"}}
        ]}"#,
    )
    .unwrap()
    .into_items();
    assert_eq!(cars.len(), 2);
    let headings: Vec<_> = cars
        .iter()
        .map(|car| car.current_status.as_ref().and_then(|s| s.direction))
        .collect();
    assert_eq!(headings, [Some(Direction::Unknown), Some(Direction::West)]);
}

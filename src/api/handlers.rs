use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::model::*;
use crate::observability::RequestTimer;

use super::{ApiError, AppState};

// Extractors are taken as `Result` so rejections are timed and answered with
// the same `{"message"}` envelope as engine errors.

fn observe<T, E: Into<ApiError>>(timer: RequestTimer, result: Result<T, E>) -> Result<T, ApiError> {
    match result {
        Ok(v) => {
            timer.finish("ok");
            Ok(v)
        }
        Err(e) => {
            let err: ApiError = e.into();
            timer.finish(err.label());
            Err(err)
        }
    }
}

// ── Response envelopes ───────────────────────────────────────────

#[derive(Serialize)]
pub struct RoomCreated {
    message: &'static str,
    room: Room,
}

#[derive(Serialize)]
pub struct RoomBooked {
    message: &'static str,
    booking: Booking,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedRoomsBody {
    booked_rooms: Vec<BookedRoom>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBookingsBody {
    customer_bookings: Vec<CustomerBooking>,
}

#[derive(Serialize)]
pub struct StatisticsBody {
    statistics: CustomerStatistics,
}

#[derive(Serialize)]
pub struct RoomsBody {
    rooms: Vec<Room>,
}

#[derive(Serialize)]
pub struct BookingsBody {
    bookings: Vec<Booking>,
}

#[derive(Serialize)]
pub struct AvailabilityBody {
    available: bool,
}

#[derive(Deserialize)]
pub struct DateQuery {
    date: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    date: String,
    start_time: TimeOfDay,
    end_time: TimeOfDay,
}

// ── Handlers ─────────────────────────────────────────────────────

pub async fn create_room(
    State(state): State<AppState>,
    body: Result<Json<NewRoom>, JsonRejection>,
) -> Result<(StatusCode, Json<RoomCreated>), ApiError> {
    let timer = RequestTimer::start("create_room");
    let result = body
        .map_err(ApiError::from)
        .and_then(|Json(req)| state.engine.create_room(req).map_err(ApiError::from));
    let room = observe(timer, result)?;
    Ok((
        StatusCode::CREATED,
        Json(RoomCreated {
            message: "Room created successfully!",
            room,
        }),
    ))
}

pub async fn book_room(
    State(state): State<AppState>,
    body: Result<Json<NewBooking>, JsonRejection>,
) -> Result<(StatusCode, Json<RoomBooked>), ApiError> {
    let timer = RequestTimer::start("book_room");
    let result = match body {
        Ok(Json(req)) => state.engine.book_room(req).await.map_err(ApiError::from),
        Err(rejection) => Err(ApiError::from(rejection)),
    };
    let booking = observe(timer, result)?;
    Ok((
        StatusCode::CREATED,
        Json(RoomBooked {
            message: "Room booked successfully!",
            booking,
        }),
    ))
}

pub async fn booked_rooms(State(state): State<AppState>) -> Json<BookedRoomsBody> {
    let timer = RequestTimer::start("list_booked_rooms");
    let booked_rooms = state.engine.list_booked_rooms().await;
    timer.finish("ok");
    Json(BookedRoomsBody { booked_rooms })
}

pub async fn customer_bookings(State(state): State<AppState>) -> Json<CustomerBookingsBody> {
    let timer = RequestTimer::start("list_customer_bookings");
    let customer_bookings = state.engine.list_customer_bookings().await;
    timer.finish("ok");
    Json(CustomerBookingsBody { customer_bookings })
}

pub async fn customer_statistics(State(state): State<AppState>) -> Json<StatisticsBody> {
    let timer = RequestTimer::start("customer_statistics");
    let statistics = state.engine.customer_statistics().await;
    timer.finish("ok");
    Json(StatisticsBody { statistics })
}

pub async fn list_rooms(State(state): State<AppState>) -> Json<RoomsBody> {
    let timer = RequestTimer::start("list_rooms");
    let rooms = state.engine.list_rooms();
    timer.finish("ok");
    Json(RoomsBody { rooms })
}

pub async fn room_bookings(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<Json<BookingsBody>, ApiError> {
    let timer = RequestTimer::start("room_bookings");
    let result = match (path, query) {
        (Ok(Path(id)), Ok(Query(q))) => state
            .engine
            .bookings_for_room(RoomId(id), &q.date)
            .await
            .map_err(ApiError::from),
        (Err(rejection), _) => Err(rejection.into()),
        (_, Err(rejection)) => Err(rejection.into()),
    };
    let bookings = observe(timer, result)?;
    Ok(Json(BookingsBody { bookings }))
}

pub async fn room_availability(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> Result<Json<AvailabilityBody>, ApiError> {
    let timer = RequestTimer::start("check_availability");
    let result = match (path, query) {
        (Ok(Path(id)), Ok(Query(q))) => state
            .engine
            .check_availability(RoomId(id), &q.date, Slot::new(q.start_time, q.end_time))
            .await
            .map_err(ApiError::from),
        (Err(rejection), _) => Err(rejection.into()),
        (_, Err(rejection)) => Err(rejection.into()),
    };
    let available = observe(timer, result)?;
    Ok(Json(AvailabilityBody { available }))
}

pub async fn health() -> &'static str {
    "ok"
}

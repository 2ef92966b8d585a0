//! HTTP transport for the backend API.
//!
//! One [`ApiClient`] is built at startup and handed to every page through its
//! props. Cloning is cheap and clones compare equal, so pages only re-render
//! when they are given a different client.

use std::rc::Rc;

use cargame_core::{
    ApiConfig, ApiError, ApiResponse, CarCommand, CarDto, CarInGame, CarMoveEventDto,
    CarMovementsFilter, Endpoint, Envelope, GameDto, GameMapDto, GameStatusFilter, NewCar,
    NewGame, RunningGameDto, validate_map_name,
};
use gloo_net::http::{Method, Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Clone, Debug)]
pub struct ApiClient {
    config: Rc<ApiConfig>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
    }
}

fn network(err: &gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn decode(err: &gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

// Wasm futures rely on `JsFuture`, which is not `Send`.
#[allow(clippy::future_not_send)]
impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, endpoint: &Endpoint) -> RequestBuilder {
        let url = self.config.url_for(endpoint);
        log::debug!("{method} {url}");
        self.config
            .headers()
            .fold(RequestBuilder::new(url.as_str()).method(method), |builder, (name, value)| {
                builder.header(name, value)
            })
    }

    async fn send(&self, request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
        let response = request
            .map_err(|err| network(&err))?
            .send()
            .await
            .map_err(|err| {
                log::warn!("Request did not reach the backend: {err}");
                network(&err)
            })?;
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::warn!("Backend rejected {} with status {status}", response.url());
        Err(ApiError::Response(ApiResponse::from_body(status, &body)))
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, ApiError> {
        let response = self
            .send(self.request(Method::GET, endpoint).build())
            .await?;
        response.json::<T>().await.map_err(|err| decode(&err))
    }

    async fn post_json<B, T>(&self, endpoint: &Endpoint, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send(self.request(Method::POST, endpoint).json(body))
            .await?;
        response.json::<T>().await.map_err(|err| decode(&err))
    }

    async fn execute<B>(&self, method: Method, endpoint: &Endpoint, body: Option<&B>) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.request(method, endpoint);
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        };
        self.send(request).await.map(|_| ())
    }

    async fn delete(&self, endpoint: &Endpoint) -> Result<(), ApiError> {
        self.execute::<()>(Method::DELETE, endpoint, None).await
    }

    /// # Errors
    /// Any transport, status or decoding failure.
    pub async fn list_maps(&self) -> Result<Vec<GameMapDto>, ApiError> {
        self.fetch::<Envelope<Vec<GameMapDto>>>(&Endpoint::Maps)
            .await
            .map(Envelope::into_items)
    }

    /// Upload a CSV map file under `name`.
    ///
    /// # Errors
    /// Any transport, status or decoding failure, or a blank name.
    pub async fn upload_map(&self, name: &str, file: &web_sys::File) -> Result<GameMapDto, ApiError> {
        validate_map_name(name)?;
        let form = web_sys::FormData::new()
            .map_err(|err| ApiError::Network(crate::dom::js_error_message(&err)))?;
        form.append_with_blob("gameMapFile", file)
            .and_then(|()| form.append_with_str("gameMapName", name.trim()))
            .map_err(|err| ApiError::Network(crate::dom::js_error_message(&err)))?;
        let response = self
            .send(self.request(Method::POST, &Endpoint::Maps).body(form))
            .await?;
        response
            .json::<Envelope<GameMapDto>>()
            .await
            .map_err(|err| decode(&err))?
            .into_data()
    }

    /// # Errors
    /// Any transport or status failure.
    pub async fn delete_map(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&Endpoint::Map { id }).await
    }

    /// # Errors
    /// Any transport, status or decoding failure.
    pub async fn list_cars(&self) -> Result<Vec<CarDto>, ApiError> {
        self.fetch::<Envelope<Vec<CarDto>>>(&Endpoint::Cars)
            .await
            .map(Envelope::into_items)
    }

    /// # Errors
    /// Validation, transport, status or decoding failure.
    pub async fn add_car(&self, car: &NewCar) -> Result<CarDto, ApiError> {
        car.validate()?;
        self.post_json::<_, Envelope<CarDto>>(&Endpoint::Cars, car)
            .await?
            .into_data()
    }

    /// # Errors
    /// Any transport or status failure.
    pub async fn delete_car(&self, name: &str) -> Result<(), ApiError> {
        self.delete(&Endpoint::Car {
            name: name.to_string(),
        })
        .await
    }

    /// # Errors
    /// Any transport, status or decoding failure.
    pub async fn repair_car(&self, name: &str) -> Result<CarDto, ApiError> {
        let endpoint = Endpoint::CarRepair {
            name: name.to_string(),
        };
        let response = self
            .send(self.request(Method::POST, &endpoint).build())
            .await?;
        response
            .json::<Envelope<CarDto>>()
            .await
            .map_err(|err| decode(&err))?
            .into_data()
    }

    /// Send a movement command to a car taking part in a running game.
    ///
    /// # Errors
    /// Validation, transport or status failure.
    pub async fn command_car(&self, name: &str, command: CarCommand) -> Result<(), ApiError> {
        command.validate()?;
        let endpoint = Endpoint::CarCommand {
            name: name.to_string(),
            command,
        };
        self.execute(Method::POST, &endpoint, command.body().as_ref())
            .await
    }

    /// # Errors
    /// Validation, transport, status or decoding failure.
    pub async fn car_movements(
        &self,
        filter: &CarMovementsFilter,
    ) -> Result<Vec<CarMoveEventDto>, ApiError> {
        filter.validate()?;
        self.fetch::<Envelope<Vec<CarMoveEventDto>>>(&Endpoint::CarMovements(filter.clone()))
            .await
            .map(Envelope::into_items)
    }

    /// # Errors
    /// Any transport, status or decoding failure.
    pub async fn list_games(
        &self,
        status: Option<GameStatusFilter>,
    ) -> Result<Vec<GameDto>, ApiError> {
        self.fetch::<Envelope<Vec<GameDto>>>(&Endpoint::Games { status })
            .await
            .map(Envelope::into_items)
    }

    /// Start a game on the map called `map_name`.
    ///
    /// # Errors
    /// Validation, transport, status or decoding failure.
    pub async fn start_game(&self, map_name: &str) -> Result<GameDto, ApiError> {
        let game = NewGame {
            name: map_name.trim().to_string(),
        };
        game.validate()?;
        self.post_json::<_, Envelope<GameDto>>(&Endpoint::Games { status: None }, &game)
            .await?
            .into_data()
    }

    /// # Errors
    /// Any transport, status or decoding failure.
    pub async fn game_details(&self, id: i64) -> Result<GameDto, ApiError> {
        self.fetch::<Envelope<GameDto>>(&Endpoint::Game { id })
            .await?
            .into_data()
    }

    /// # Errors
    /// Validation, transport or status failure.
    pub async fn add_car_to_game(&self, id: i64, car: &CarInGame) -> Result<(), ApiError> {
        car.validate()?;
        self.execute(Method::POST, &Endpoint::GameCars { id }, Some(car))
            .await
    }

    /// # Errors
    /// Any transport or status failure.
    pub async fn remove_car_from_game(&self, id: i64, name: &str) -> Result<(), ApiError> {
        self.delete(&Endpoint::GameCar {
            id,
            name: name.to_string(),
        })
        .await
    }

    /// # Errors
    /// Any transport, status or decoding failure.
    pub async fn running_game(&self, id: i64) -> Result<RunningGameDto, ApiError> {
        self.fetch::<Envelope<RunningGameDto>>(&Endpoint::RunningGame { id })
            .await?
            .into_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::new("http://localhost:8080").unwrap()
    }

    #[test]
    fn clones_share_configuration() {
        let client = ApiClient::new(config());
        let clone = client.clone();
        assert_eq!(client, clone);
        assert_eq!(clone.config().base_url().as_str(), "http://localhost:8080/");
    }

    #[test]
    fn separately_built_clients_differ() {
        assert_ne!(ApiClient::new(config()), ApiClient::new(config()));
    }
}

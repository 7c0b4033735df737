use resound::{AcousticParams, Float, Path, Point, Rir, Room};
use std::error::Error;

pub use serde_json;

/// This is essentially `try_into` then `try_map` but the latter is nightly-only
pub fn json_array_to_float_array<const D: usize>(
    json_array: &[serde_json::Value],
) -> Option<[Float; D]> {
    let array: &[serde_json::Value; D] = json_array.try_into().ok()?;

    let mut coords = [0.; D];
    for (coord, value) in coords.iter_mut().zip(array) {
        *coord = value.as_f64()?;
    }
    Some(coords)
}

pub fn json_array_to_point(json_array: &[serde_json::Value]) -> Option<Point> {
    json_array_to_float_array(json_array).map(Point::from)
}

fn point_field(json: &serde_json::Value, field: &str) -> Result<Point, Box<dyn Error>> {
    json.get(field)
        .and_then(serde_json::Value::as_array)
        .map(Vec::as_slice)
        .and_then(json_array_to_point)
        .ok_or_else(|| format!("\"{field}\" must be an array of 2 floats").into())
}

fn float_field(json: &serde_json::Value, field: &str) -> Result<Float, Box<dyn Error>> {
    json.get(field)
        .and_then(serde_json::Value::as_f64)
        .ok_or_else(|| format!("\"{field}\" must be a float").into())
}

pub trait JsonSer {
    /// Serialize `self` into a JSON object.
    fn to_json(&self) -> serde_json::Value;
}

impl<T: JsonSer> JsonSer for [T] {
    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(Vec::from_iter(self.iter().map(T::to_json)))
    }
}

impl<T: JsonSer> JsonSer for Vec<T> {
    fn to_json(&self) -> serde_json::Value {
        self.as_slice().to_json()
    }
}

pub trait JsonDes {
    /// Deserialize from a JSON object.
    ///
    /// Returns an error if `json`'s format or values are invalid.
    fn from_json(json: &serde_json::Value) -> Result<Self, Box<dyn Error>>
    where
        Self: Sized;
}

impl JsonSer for Room {
    /// Serialize a room into a JSON object.
    ///
    /// The format of the returned object is explained in [`Self::from_json`]
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "width": self.width,
            "height": self.height,
            "source": self.source.as_slice(),
            "receiver": self.receiver.as_slice(),
        })
    }
}

impl JsonDes for Room {
    /// Deserialize a room from a JSON object.
    ///
    /// The JSON object must follow the following format:
    ///
    /// ```json
    /// {
    ///     "width": 10.0, // must be positive
    ///     "height": 6.0, // must be positive
    ///     "source": [2.0, 2.0],
    ///     "receiver": [8.0, 4.0],
    /// }
    /// ```
    fn from_json(json: &serde_json::Value) -> Result<Self, Box<dyn Error>> {
        let width = float_field(json, "width")?;
        let height = float_field(json, "height")?;
        let source = point_field(json, "source")?;
        let receiver = point_field(json, "receiver")?;

        Ok(Room::new(width, height, source, receiver)?)
    }
}

impl JsonSer for AcousticParams {
    /// Serialize acoustic parameters into a JSON object.
    ///
    /// The format of the returned object is explained in [`Self::from_json`]
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "speed_of_sound": self.speed_of_sound,
            "reflection_coefficient": self.reflection_coefficient,
            "eps": self.eps,
        })
    }
}

impl JsonDes for AcousticParams {
    /// Deserialize acoustic parameters from a JSON object.
    ///
    /// The JSON object must follow the following format:
    ///
    /// ```json
    /// {
    ///     "speed_of_sound": 1125.0, // in room length units per second
    ///     "reflection_coefficient": 0.7, // expected in (0, 1]
    ///     "eps": 1e-6,
    /// }
    /// ```
    fn from_json(json: &serde_json::Value) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            speed_of_sound: float_field(json, "speed_of_sound")?,
            reflection_coefficient: float_field(json, "reflection_coefficient")?,
            eps: float_field(json, "eps")?,
        })
    }
}

impl JsonSer for Path {
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "order": self.order,
            "delay": self.delay,
            "gain": self.gain,
        })
    }
}

impl JsonSer for Rir {
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "sample_rate": self.sample_rate(),
            "samples": self.samples(),
        })
    }
}

/// Bundle a whole simulation into one self-describing JSON document:
/// the scene (room and acoustic parameters), the evaluated path list in
/// its positional order, and the impulse response built from it.
pub fn serialize_simulation(
    room: &Room,
    params: &AcousticParams,
    paths: &[Path],
    rir: &Rir,
) -> serde_json::Value {
    serde_json::json!({
        "room": room.to_json(),
        "params": params.to_json(),
        "paths": paths.to_json(),
        "rir": rir.to_json(),
    })
}

/// Read back the inputs of a simulation document: the room and the
/// acoustic parameters. The computed parts (paths, impulse response) are
/// outputs and are meant to be rebuilt, not parsed.
pub fn deserialize_scene(
    json: &serde_json::Value,
) -> Result<(Room, AcousticParams), Box<dyn Error>> {
    Ok((
        Room::from_json(json.get("room").ok_or("room field expected")?)?,
        AcousticParams::from_json(json.get("params").ok_or("params field expected")?)?,
    ))
}

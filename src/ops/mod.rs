pub mod clock;
pub mod controller;
pub mod dispatch;
pub mod duration;
pub mod gate;

#[cfg(test)]
pub mod test_ports;

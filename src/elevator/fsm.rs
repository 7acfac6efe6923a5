/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ElevatorConfig;
use crate::elevator::ElevatorReport;
use crate::shared::{Behaviour, Direction, DoorState, Request, ServiceState};

/**
 * Simulates a single elevator car, one tick at a time.
 *
 * The `Elevator` is a finite state machine driven entirely by `step()`. Each step moves the car
 * at most one floor or counts one of its timers down by one. Stops are only ever assigned in the
 * car's direction of travel, so a car sweeps monotonically towards the end of the shaft, parks
 * there and waits for the next batch.
 *
 * # Fields
 * - `id`:                  Index of the car in the fleet.
 * - `n_floors`:            Number of floors served by the car.
 * - `capacity`:            Maximum number of assigned requests that are not yet delivered.
 * - `door_open_time`:      Number of ticks the doors stay open at a stop.
 * - `wait_time`:           Number of ticks a parked car waits before sweeping to the other end.
 * - `floor`:               Current floor.
 * - `direction`:           Current direction of travel.
 * - `state`:               Current state of the state machine, including its running timer.
 * - `stops`:               One flag per floor the car is committed to visit.
 * - `assignments`:         Requests assigned to the car and not yet delivered.
 *
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    OutOfService,
    Parked { wait_timer: u32 },
    Moving,
    DoorOpen { door_timer: u32 },
    DoorClosing,
    // A door timer of zero means the doors are closed and the car is heading for floor 0
    GoingOutOfService { door_timer: u32 },
}

#[derive(Debug, Clone, Copy)]
struct Assignment {
    request: Request,
    boarded: bool,
}

#[derive(Debug, Clone)]
pub struct Elevator {
    id: usize,
    n_floors: u8,
    capacity: usize,
    door_open_time: u32,
    wait_time: u32,
    floor: u8,
    direction: Direction,
    state: State,
    stops: Vec<bool>,
    assignments: Vec<Assignment>,
}

impl Elevator {
    pub fn new(id: usize, n_floors: u8, capacity: usize, config: &ElevatorConfig) -> Elevator {
        Elevator {
            id,
            n_floors,
            capacity,
            door_open_time: config.door_open_time,
            wait_time: config.wait_time,
            floor: 0,
            direction: Direction::Stop,
            state: State::OutOfService,
            stops: vec![false; n_floors as usize],
            assignments: Vec::new(),
        }
    }

    /// Puts an out-of-service car into service, parked at floor 0 with its doors closed.
    ///
    /// Returns `false` and leaves the car untouched if it is already in service or still on
    /// its way out of service.
    pub fn start(&mut self) -> bool {
        if self.state != State::OutOfService {
            return false;
        }

        self.floor = 0;
        self.direction = Direction::Stop;
        self.state = State::Parked {
            wait_timer: self.wait_time,
        };
        debug!("elevator {}: started, parked at floor 0", self.id);
        true
    }

    /// Drops every stop and assignment and sends the car to floor 0 to power down.
    ///
    /// A car already at floor 0 with its doors closed powers down at once. An open door keeps
    /// its remaining time before the car starts moving.
    pub fn take_out_of_service(&mut self) {
        let door_timer = match self.state {
            State::OutOfService | State::GoingOutOfService { .. } => return,
            State::DoorOpen { door_timer } => door_timer,
            State::Parked { .. } | State::Moving | State::DoorClosing => 0,
        };

        self.stops.fill(false);
        self.assignments.clear();

        if self.floor == 0 && door_timer == 0 {
            self.power_down();
        } else {
            self.direction = Direction::Down;
            self.state = State::GoingOutOfService { door_timer };
            debug!("elevator {}: going out of service from floor {}", self.id, self.floor);
        }
    }

    /// Adds the requests of `batch` to the car's stops.
    ///
    /// A request is accepted while there is spare capacity and it lies ahead of the car in its
    /// direction of travel. Everything else is handed back, in the order it was given.
    pub fn assign_requests(&mut self, batch: Vec<Request>) -> Vec<Request> {
        if !self.accepts_assignments() {
            return batch;
        }

        let mut rejected = Vec::new();
        let mut accepted = 0;
        for request in batch {
            if self.assignments.len() >= self.capacity || !self.fits_travel(&request) {
                rejected.push(request);
                continue;
            }
            if self.direction == Direction::Stop {
                self.direction = request.direction();
            }

            // Passengers at an open door board without another stop at this floor
            let boarded = request.origin() == self.floor && self.door_state() == DoorState::Open;
            if !boarded {
                self.stops[request.origin() as usize] = true;
            }
            self.stops[request.destination() as usize] = true;
            self.assignments.push(Assignment { request, boarded });
            accepted += 1;
        }

        if accepted > 0 {
            if let State::Parked { .. } = self.state {
                self.state = State::Parked {
                    wait_timer: self.wait_time,
                };
            }
            debug!(
                "elevator {}: accepted {} request(s), stops {:?}",
                self.id,
                accepted,
                self.pending_stops()
            );
        }
        rejected
    }

    /// Advances the car by one tick.
    pub fn step(&mut self) {
        match self.state {
            State::OutOfService => {}
            State::Parked { wait_timer } => {
                if self.has_stops() {
                    self.advance();
                } else if wait_timer > 1 {
                    self.state = State::Parked {
                        wait_timer: wait_timer - 1,
                    };
                } else {
                    self.direction = if self.floor == 0 {
                        Direction::Up
                    } else {
                        Direction::Down
                    };
                    self.state = State::Moving;
                    debug!(
                        "elevator {}: done waiting at floor {}, sweeping {:?}",
                        self.id, self.floor, self.direction
                    );
                }
            }
            State::Moving | State::DoorClosing => self.advance(),
            State::DoorOpen { door_timer } => {
                self.state = if door_timer > 1 {
                    State::DoorOpen {
                        door_timer: door_timer - 1,
                    }
                } else {
                    State::DoorClosing
                };
            }
            State::GoingOutOfService { door_timer } => {
                if door_timer > 0 {
                    self.state = State::GoingOutOfService {
                        door_timer: door_timer - 1,
                    };
                    return;
                }
                self.floor = self.floor.saturating_sub(1);
                if self.floor == 0 {
                    self.power_down();
                }
            }
        }
    }

    pub fn status(&self) -> ElevatorReport {
        ElevatorReport {
            id: self.id,
            floor: self.floor,
            direction: self.direction,
            door: self.door_state(),
            door_timer: self.door_timer(),
            wait_timer: self.wait_timer(),
            stops: self.pending_stops(),
            floor_requests: self.stops.clone(),
            active_requests: self.assignments.len(),
            behaviour: self.behaviour(),
            service_state: self.service_state(),
            taking_requests: self.is_taking_requests(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn floor(&self) -> u8 {
        self.floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn active_requests(&self) -> usize {
        self.assignments.len()
    }

    pub fn free_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.assignments.len())
    }

    /// Only a parked car in service takes a new batch from the dispatcher.
    pub fn is_taking_requests(&self) -> bool {
        matches!(self.state, State::Parked { .. })
    }

    /// True once the car sits powered down at floor 0 with its doors closed.
    pub fn is_powered_down(&self) -> bool {
        self.state == State::OutOfService
    }

    pub fn door_state(&self) -> DoorState {
        match self.state {
            State::DoorOpen { .. } => DoorState::Open,
            State::GoingOutOfService { door_timer } if door_timer > 0 => DoorState::Open,
            State::DoorClosing => DoorState::Closing,
            _ => DoorState::Closed,
        }
    }

    pub fn behaviour(&self) -> Behaviour {
        match self.state {
            State::OutOfService => Behaviour::OutOfService,
            State::Parked { .. } => Behaviour::Parked,
            State::Moving => Behaviour::Moving,
            State::DoorOpen { .. } => Behaviour::DoorOpen,
            State::DoorClosing => Behaviour::DoorClosing,
            State::GoingOutOfService { .. } => Behaviour::GoingOutOfService,
        }
    }

    pub fn service_state(&self) -> ServiceState {
        match self.state {
            State::OutOfService | State::GoingOutOfService { .. } => ServiceState::OutOfService,
            _ => ServiceState::InService,
        }
    }

    /// Floors the car still has to visit, in the order it will reach them.
    pub fn pending_stops(&self) -> Vec<u8> {
        let mut stops: Vec<u8> = (0..self.n_floors)
            .filter(|floor| self.stops[*floor as usize])
            .collect();
        if self.direction == Direction::Down {
            stops.reverse();
        }
        stops
    }

    fn door_timer(&self) -> u32 {
        match self.state {
            State::DoorOpen { door_timer } | State::GoingOutOfService { door_timer } => door_timer,
            _ => 0,
        }
    }

    fn wait_timer(&self) -> u32 {
        match self.state {
            State::Parked { wait_timer } => wait_timer,
            _ => 0,
        }
    }

    fn accepts_assignments(&self) -> bool {
        matches!(
            self.state,
            State::Parked { .. } | State::Moving | State::DoorOpen { .. } | State::DoorClosing
        )
    }

    fn fits_travel(&self, request: &Request) -> bool {
        match self.direction {
            Direction::Stop => match request.direction() {
                Direction::Up => request.origin() >= self.floor,
                _ => request.origin() <= self.floor,
            },
            Direction::Up => {
                request.direction() == Direction::Up && request.origin() >= self.floor
            }
            Direction::Down => {
                request.direction() == Direction::Down && request.origin() <= self.floor
            }
        }
    }

    fn has_stops(&self) -> bool {
        self.stops.iter().any(|stop| *stop)
    }

    fn has_stops_above(&self) -> bool {
        self.stops[(self.floor as usize + 1)..].iter().any(|stop| *stop)
    }

    fn top_floor(&self) -> u8 {
        self.n_floors - 1
    }

    fn at_end_of_travel(&self) -> bool {
        match self.direction {
            Direction::Up => self.floor == self.top_floor(),
            Direction::Down => self.floor == 0,
            Direction::Stop => true,
        }
    }

    // One movement step: serve the current floor, park at the end of the shaft, or move on
    fn advance(&mut self) {
        if self.stops[self.floor as usize] {
            self.serve_floor();
            self.state = State::DoorOpen {
                door_timer: self.door_open_time,
            };
            return;
        }

        if self.at_end_of_travel() {
            if !self.has_stops() {
                self.park();
                return;
            }
            self.direction = if self.has_stops_above() {
                Direction::Up
            } else {
                Direction::Down
            };
        }

        match self.direction {
            Direction::Up => self.floor += 1,
            Direction::Down => self.floor -= 1,
            Direction::Stop => {}
        }
        self.state = State::Moving;
    }

    fn serve_floor(&mut self) {
        let floor = self.floor;
        self.stops[floor as usize] = false;

        let before = self.assignments.len();
        self.assignments
            .retain(|a| !(a.boarded && a.request.destination() == floor));
        let delivered = before - self.assignments.len();

        let mut boarded = 0;
        for assignment in self.assignments.iter_mut() {
            if !assignment.boarded && assignment.request.origin() == floor {
                assignment.boarded = true;
                boarded += 1;
            }
        }
        debug!(
            "elevator {}: doors open at floor {}, {} delivered, {} boarded",
            self.id, floor, delivered, boarded
        );
    }

    fn park(&mut self) {
        self.direction = Direction::Stop;
        self.state = State::Parked {
            wait_timer: self.wait_time,
        };
        debug!("elevator {}: parked at floor {}", self.id, self.floor);
    }

    fn power_down(&mut self) {
        self.floor = 0;
        self.direction = Direction::Stop;
        self.state = State::OutOfService;
        self.stops.fill(false);
        self.assignments.clear();
        debug!("elevator {}: out of service at floor 0", self.id);
    }
}

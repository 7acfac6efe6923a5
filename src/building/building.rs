/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};
use std::collections::VecDeque;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::building::{BuildingReport, ElevatorSystem};
use crate::config::{BuildingConfig, ElevatorConfig};
use crate::elevator::Elevator;
use crate::shared::{Direction, Request, SimError, SystemStatus};

/***************************************/
/*             Constants               */
/***************************************/
pub const MIN_FLOORS: u8 = 3;
pub const MAX_FLOORS: u8 = 30;
pub const MIN_ELEVATORS: u8 = 1;
pub const MAX_ELEVATORS: u8 = 10;
pub const MIN_CAPACITY: u8 = 3;
pub const MAX_CAPACITY: u8 = 20;

/**
 * Dispatches travel requests over a fleet of elevators.
 *
 * The `Building` owns the pending up and down queues and every car. On each tick a parked car at
 * floor 0 takes a batch from the up queue, and a parked car at the top floor takes a batch from
 * the down queue, so a car only ever receives stops it can serve in one sweep.
 *
 * # Fields
 * - `n_floors`:            Number of floors, in [3, 30].
 * - `n_elevators`:         Number of cars, in [1, 10].
 * - `elevator_capacity`:   Maximum number of requests per car, in [3, 20].
 * - `up_requests`:         Pending requests going up, oldest first.
 * - `down_requests`:       Pending requests going down, oldest first.
 * - `elevators`:           The fleet, indexed by car id.
 * - `status`:              Status of the elevator system as a whole.
 *
 */
#[derive(Debug, Clone)]
pub struct Building {
    n_floors: u8,
    n_elevators: u8,
    elevator_capacity: u8,
    up_requests: VecDeque<Request>,
    down_requests: VecDeque<Request>,
    elevators: Vec<Elevator>,
    status: SystemStatus,
}

impl Building {
    pub fn new(config: &BuildingConfig, elevator_config: &ElevatorConfig) -> Result<Building, SimError> {
        check_range("number of floors", config.n_floors, MIN_FLOORS, MAX_FLOORS)?;
        check_range("number of elevators", config.n_elevators, MIN_ELEVATORS, MAX_ELEVATORS)?;
        check_range("elevator capacity", config.elevator_capacity, MIN_CAPACITY, MAX_CAPACITY)?;
        if elevator_config.door_open_time == 0 || elevator_config.wait_time == 0 {
            return Err(SimError::Configuration(
                "door open time and wait time must be at least one tick".to_string(),
            ));
        }

        let elevators = (0..config.n_elevators as usize)
            .map(|id| {
                Elevator::new(
                    id,
                    config.n_floors,
                    config.elevator_capacity as usize,
                    elevator_config,
                )
            })
            .collect();

        Ok(Building {
            n_floors: config.n_floors,
            n_elevators: config.n_elevators,
            elevator_capacity: config.elevator_capacity,
            up_requests: VecDeque::new(),
            down_requests: VecDeque::new(),
            elevators,
            status: SystemStatus::OutOfService,
        })
    }

    pub fn status(&self) -> SystemStatus {
        self.status
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    fn top_floor(&self) -> u8 {
        self.n_floors - 1
    }

    fn tick_running(&mut self) {
        let top_floor = self.top_floor();
        let capacity = self.elevator_capacity as usize;

        for elevator in self.elevators.iter_mut() {
            if elevator.is_taking_requests() {
                if elevator.floor() == 0 && !self.up_requests.is_empty() {
                    assign_batch(elevator, &mut self.up_requests, capacity, Direction::Up);
                } else if elevator.floor() == top_floor && !self.down_requests.is_empty() {
                    assign_batch(elevator, &mut self.down_requests, capacity, Direction::Down);
                }
            }
            elevator.step();
        }
    }

    fn tick_stopping(&mut self) {
        let all_powered_down = self.elevators.iter().all(|e| e.is_powered_down());
        for elevator in self.elevators.iter_mut() {
            elevator.step();
        }

        if all_powered_down {
            self.status = SystemStatus::OutOfService;
            info!("all elevators parked at floor 0, system out of service");
        }
    }
}

impl ElevatorSystem for Building {
    fn add_request(&mut self, origin: u8, destination: u8) -> Result<(), SimError> {
        if self.status != SystemStatus::Running {
            return Err(SimError::InvalidState(format!(
                "elevator system is {}, cannot accept requests",
                self.status
            )));
        }
        if origin >= self.n_floors || destination >= self.n_floors {
            return Err(SimError::InvalidRequest(format!(
                "floors must be in [0, {}], got {}->{}",
                self.top_floor(),
                origin,
                destination
            )));
        }

        let request = Request::new(origin, destination)?;
        match request.direction() {
            Direction::Up => self.up_requests.push_back(request),
            _ => self.down_requests.push_back(request),
        }
        debug!("queued request {}", request);
        Ok(())
    }

    fn start(&mut self) -> Result<(), SimError> {
        match self.status {
            SystemStatus::Running => Ok(()),
            SystemStatus::Stopping => Err(SimError::InvalidState(
                "elevator system is stopping, cannot start".to_string(),
            )),
            SystemStatus::OutOfService => {
                for elevator in self.elevators.iter_mut() {
                    elevator.start();
                }
                self.status = SystemStatus::Running;
                info!("elevator system running with {} elevator(s)", self.n_elevators);
                Ok(())
            }
        }
    }

    fn stop(&mut self) {
        if self.status != SystemStatus::Running {
            return;
        }

        self.status = SystemStatus::Stopping;
        self.remove_all_requests();
        for elevator in self.elevators.iter_mut() {
            elevator.take_out_of_service();
        }
        info!("elevator system stopping, sending all elevators to floor 0");
    }

    fn remove_all_requests(&mut self) -> bool {
        self.up_requests.clear();
        self.down_requests.clear();
        true
    }

    fn tick(&mut self) {
        match self.status {
            SystemStatus::OutOfService => {}
            SystemStatus::Running => self.tick_running(),
            SystemStatus::Stopping => self.tick_stopping(),
        }
    }

    fn snapshot(&self) -> BuildingReport {
        BuildingReport {
            n_floors: self.n_floors,
            n_elevators: self.n_elevators,
            elevator_capacity: self.elevator_capacity,
            elevators: self.elevators.iter().map(|e| e.status()).collect(),
            up_requests: self.up_requests.iter().copied().collect(),
            down_requests: self.down_requests.iter().copied().collect(),
            system_status: self.status,
        }
    }
}

/***************************************/
/*          Private helpers            */
/***************************************/
fn check_range(name: &str, value: u8, min: u8, max: u8) -> Result<(), SimError> {
    if value < min || value > max {
        return Err(SimError::Configuration(format!(
            "{} should be in [{},{}], got {}",
            name, min, max, value
        )));
    }
    Ok(())
}

// Moves the oldest requests of `queue` into the car; whatever it refuses goes back to the front
fn assign_batch(elevator: &mut Elevator, queue: &mut VecDeque<Request>, capacity: usize, direction: Direction) {
    let batch_size = capacity.min(elevator.free_capacity()).min(queue.len());
    if batch_size == 0 {
        return;
    }

    let batch: Vec<Request> = queue.drain(..batch_size).collect();
    let rejected = elevator.assign_requests(batch);
    let accepted = batch_size - rejected.len();
    for request in rejected.into_iter().rev() {
        queue.push_front(request);
    }
    info!(
        "elevator {}: assigned {} {:?} request(s) at floor {}, {} left in queue",
        elevator.id(),
        accepted,
        direction,
        elevator.floor(),
        queue.len()
    );
}

// Fixed demo data. Nothing here is live; pages render it as-is.

#[derive(Debug, Clone, Copy)]
pub struct Arrival {
    pub route: &'static str,
    pub destination: &'static str,
    pub stop: &'static str,
    pub eta_minutes: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct RouteSchedule {
    pub route: &'static str,
    pub name: &'static str,
    pub stops: &'static [&'static str],
    pub first_departure: &'static str,
    pub last_departure: &'static str,
    pub frequency_minutes: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct BusPosition {
    pub bus_id: &'static str,
    pub route: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub status: &'static str,
}

const ARRIVALS: &[Arrival] = &[
    Arrival {
        route: "101",
        destination: "Central Station",
        stop: "Kashmere Gate",
        eta_minutes: 3,
    },
    Arrival {
        route: "202",
        destination: "Airport T3",
        stop: "Rajiv Chowk",
        eta_minutes: 7,
    },
    Arrival {
        route: "305",
        destination: "University Campus",
        stop: "Civil Lines",
        eta_minutes: 12,
    },
    Arrival {
        route: "410",
        destination: "Tech Park",
        stop: "Model Town",
        eta_minutes: 18,
    },
];

const SCHEDULES: &[RouteSchedule] = &[
    RouteSchedule {
        route: "101",
        name: "Central Loop",
        stops: &["Kashmere Gate", "Chandni Chowk", "Central Station"],
        first_departure: "05:30",
        last_departure: "23:00",
        frequency_minutes: 10,
    },
    RouteSchedule {
        route: "202",
        name: "Airport Express",
        stops: &["Rajiv Chowk", "Dhaula Kuan", "Airport T3"],
        first_departure: "04:45",
        last_departure: "23:45",
        frequency_minutes: 20,
    },
    RouteSchedule {
        route: "305",
        name: "Campus Connector",
        stops: &["Civil Lines", "Vidhan Sabha", "University Campus"],
        first_departure: "06:00",
        last_departure: "22:00",
        frequency_minutes: 15,
    },
    RouteSchedule {
        route: "410",
        name: "Tech Park Shuttle",
        stops: &["Model Town", "Azadpur", "Tech Park"],
        first_departure: "07:00",
        last_departure: "21:00",
        frequency_minutes: 30,
    },
];

const POSITIONS: &[BusPosition] = &[
    BusPosition {
        bus_id: "SBF-101-A",
        route: "101",
        lat: 28.7041,
        lng: 77.1025,
        status: "On time",
    },
    BusPosition {
        bus_id: "SBF-202-B",
        route: "202",
        lat: 28.7120,
        lng: 77.1105,
        status: "Delayed 4 min",
    },
    BusPosition {
        bus_id: "SBF-305-C",
        route: "305",
        lat: 28.6980,
        lng: 77.0950,
        status: "On time",
    },
];

pub fn upcoming_arrivals() -> &'static [Arrival] {
    ARRIVALS
}

pub fn route_schedules() -> &'static [RouteSchedule] {
    SCHEDULES
}

pub fn bus_positions() -> &'static [BusPosition] {
    POSITIONS
}

//! Route lookup over an enriched timetable.

mod route;


pub use route::{
    INVALID_SELECTION_MESSAGE, NO_TRAINS_MESSAGE, RouteFinder, RouteMatch, RouteOutcome,
    RouteQuery, Timetable,
};

pub mod app;
pub mod chat_view;
pub mod faculty_dashboard;
pub mod project_phases;
pub mod session_state;
pub mod student_workspace;
pub mod timezone_visualizer;

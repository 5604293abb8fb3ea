mod end_to_end;
mod safety_interlock;
mod scenario_files;

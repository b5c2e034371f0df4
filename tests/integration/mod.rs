mod tracker_workflow;

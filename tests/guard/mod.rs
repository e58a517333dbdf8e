mod can_enter;

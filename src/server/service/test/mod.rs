mod payment_run;
